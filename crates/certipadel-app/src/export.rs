//! Export pipeline: validation, background rendering, file write.
//!
//! One export at a time. The controller validates synchronously before any
//! rendering resource is touched, runs the render/encode/write chain on a
//! worker thread, and guarantees the busy state clears on every outcome.

use certipadel_core::{CertificateInput, ValidationError};
use certipadel_render::CertificateRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use thiserror::Error;

/// Generic user-facing failure message for anything past validation.
pub const EXPORT_ERROR_MESSAGE: &str =
    "Hubo un error al generar la imagen. Por favor intenta de nuevo.";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Ya hay una exportación en curso")]
    Busy,
    #[error(transparent)]
    Render(#[from] certipadel_render::RenderError),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Export worker disappeared before reporting a result")]
    WorkerLost,
}

impl ExportError {
    /// What the user sees: the specific validation alert for input errors,
    /// one generic message for everything else. No automatic retries.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::Validation(e) => e.to_string(),
            _ => EXPORT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Gates exports to one in flight and reports their outcomes.
pub struct ExportController {
    in_flight: Option<Receiver<Result<PathBuf, ExportError>>>,
}

impl ExportController {
    pub fn new() -> Self {
        Self { in_flight: None }
    }

    /// Whether an export is running. The UI disables the trigger control
    /// while this is true; there is no queue.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate the input and start an export to `destination`.
    ///
    /// On a validation failure nothing is rendered and the controller never
    /// goes busy. A second request while busy is rejected, not queued.
    pub fn begin(
        &mut self,
        renderer: Arc<CertificateRenderer>,
        input: CertificateInput,
        destination: PathBuf,
    ) -> Result<(), ExportError> {
        input.validate()?;
        if self.in_flight.is_some() {
            return Err(ExportError::Busy);
        }

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let outcome = run_export(&renderer, &input, destination);
            // Receiver may be gone if the app shut down mid-export.
            let _ = tx.send(outcome);
        });
        self.in_flight = Some(rx);
        Ok(())
    }

    /// Poll the in-flight export, if any. The busy state clears on success,
    /// failure, and worker loss alike.
    pub fn poll(&mut self) -> Option<Result<PathBuf, ExportError>> {
        let rx = self.in_flight.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.in_flight = None;
                Some(Err(ExportError::WorkerLost))
            }
        }
    }
}

impl Default for ExportController {
    fn default() -> Self {
        Self::new()
    }
}

/// Render, encode and write one certificate. Runs on the worker thread.
fn run_export(
    renderer: &CertificateRenderer,
    input: &CertificateInput,
    destination: PathBuf,
) -> Result<PathBuf, ExportError> {
    let frame = renderer.render_export(input);
    let jpeg = renderer.encode_jpeg(&frame)?;
    std::fs::write(&destination, &jpeg).map_err(|source| ExportError::Io {
        path: destination.clone(),
        source,
    })?;
    log::info!(
        "Exported certificate to {} ({} bytes)",
        destination.display(),
        jpeg.len()
    );
    Ok(destination)
}
