//! Core application state and lifecycle.

use crate::export::ExportController;
use crate::ui;
use certipadel_core::{congratulation_message, CertificateInput};
use certipadel_render::CertificateRenderer;
use certipadel_widgets::panel_frame;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fixed location of the logo asset, resolved once at startup.
const LOGO_PATH: &str = "assets/logo.png";
/// How long the copy button shows its confirmation state.
const COPY_FEEDBACK: Duration = Duration::from_secs(2);
/// How long status toasts stay on screen.
const STATUS_LIFETIME: Duration = Duration::from_secs(5);

struct StatusToast {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

/// Application state: the certificate input, the shared renderer, the
/// preview texture and the export controller.
pub struct CertipadelApp {
    input: CertificateInput,
    renderer: Arc<CertificateRenderer>,
    export: ExportController,
    preview: Option<egui::TextureHandle>,
    preview_stale: bool,
    status: Option<StatusToast>,
    copied_at: Option<Instant>,
}

impl CertipadelApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut renderer = CertificateRenderer::new();
        // Embed the logo once at startup; a missing asset degrades to a
        // logo-less certificate.
        if let Err(e) = renderer.load_logo(Path::new(LOGO_PATH)) {
            log::warn!("Continuing without logo: {e}");
        }

        let mut app = Self {
            input: CertificateInput::new(),
            renderer: Arc::new(renderer),
            export: ExportController::new(),
            preview: None,
            preview_stale: true,
            status: None,
            copied_at: None,
        };
        if !app.renderer.has_fonts() {
            app.show_error(
                "No se encontraron fuentes del sistema; el certificado se generará sin texto."
                    .to_string(),
            );
        }
        app
    }

    fn show_info(&mut self, text: String) {
        self.status = Some(StatusToast {
            text,
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    fn show_error(&mut self, text: String) {
        self.status = Some(StatusToast {
            text,
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    /// Re-render the preview texture when the input changed.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        if !self.preview_stale && self.preview.is_some() {
            return;
        }
        let frame = self.renderer.render_preview(&self.input);
        let size = [frame.width() as usize, frame.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
        match &mut self.preview {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.preview =
                    Some(ctx.load_texture("certificate-preview", image, egui::TextureOptions::LINEAR))
            }
        }
        self.preview_stale = false;
    }

    /// Validate, ask for a destination, and hand off to the export
    /// controller. Input errors surface before the dialog opens; cancelling
    /// the dialog aborts silently.
    fn start_export(&mut self) {
        if let Err(e) = self.input.validate() {
            self.show_error(e.to_string());
            return;
        }

        let dialog = rfd::FileDialog::new()
            .set_title("Guardar certificado")
            .set_file_name(self.input.download_file_name())
            .add_filter("JPEG Image", &["jpg", "jpeg"]);
        let Some(path) = dialog.save_file() else {
            return;
        };

        let started = self
            .export
            .begin(Arc::clone(&self.renderer), self.input.clone(), path);
        if let Err(e) = started {
            log::error!("Export rejected: {e}");
            self.show_error(e.user_message());
        }
    }

    fn paint_status(&mut self, ctx: &egui::Context) {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() > STATUS_LIFETIME);
        if expired {
            self.status = None;
        }
        let Some(toast) = &self.status else { return };

        egui::Area::new(egui::Id::new("status-toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                panel_frame().show(ui, |ui| {
                    let color = if toast.is_error {
                        egui::Color32::from_rgb(190, 40, 40)
                    } else {
                        egui::Color32::from_rgb(30, 130, 60)
                    };
                    ui.colored_label(color, &toast.text);
                });
            });
    }
}

impl eframe::App for CertipadelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Finished exports clear the busy state here, on every outcome.
        if let Some(outcome) = self.export.poll() {
            match outcome {
                Ok(path) => self.show_info(format!("Certificado guardado en {}", path.display())),
                Err(e) => {
                    log::error!("Export failed: {e}");
                    self.show_error(e.user_message());
                }
            }
        }

        self.refresh_preview(ctx);

        egui::SidePanel::left("form-panel")
            .exact_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let copied = self
                        .copied_at
                        .is_some_and(|at| at.elapsed() < COPY_FEEDBACK);
                    let response = ui::form_panel(ui, &mut self.input, copied);
                    if response.changed {
                        self.preview_stale = true;
                    }
                    if response.copy_requested {
                        ctx.copy_text(congratulation_message(&self.input));
                        self.copied_at = Some(Instant::now());
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui::preview_header(ui, self.export.is_busy()) {
                self.start_export();
            }
            ui.add_space(10.0);

            if let Some(texture) = self.preview.clone() {
                let avail = ui.available_size();
                let tex_size = texture.size_vec2();
                let scale = (avail.x / tex_size.x).min(avail.y / tex_size.y).min(1.0);
                ui.with_layout(
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        ui.add(egui::Image::new(&texture).fit_to_exact_size(tex_size * scale));
                    },
                );
            }
        });

        self.paint_status(ctx);

        // Keep polling while an export runs or transient UI states tick down.
        if self.export.is_busy() || self.copied_at.is_some() || self.status.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
