//! CertiPadel Application
//!
//! The desktop shell: sidebar form, live certificate preview, and the
//! JPEG export pipeline behind the download button.

mod app;
mod export;
mod ui;

pub use app::CertipadelApp;
pub use export::{ExportController, ExportError};
