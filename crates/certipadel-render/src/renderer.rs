//! Certificate rendering and JPEG encoding.

use crate::fonts::FontLibrary;
use crate::layout::{self, scaled_size};
use crate::raster::Canvas;
use certipadel_core::{action_verb, formatted_fecha, CertificateInput};
use image::{RgbImage, Rgb, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No usable font: {0}")]
    FontsUnavailable(String),
    #[error("Failed to load logo {path}: {message}")]
    LogoLoad { path: PathBuf, message: String },
    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders [`CertificateInput`] to pixels at an arbitrary scale.
///
/// Fonts and the logo are resolved once, up front; rendering itself is
/// synchronous and deterministic, and every call produces a fresh frame.
pub struct CertificateRenderer {
    fonts: Option<FontLibrary>,
    logo: Option<RgbaImage>,
}

impl CertificateRenderer {
    /// Create a renderer, resolving system fonts.
    ///
    /// A fontless environment is degraded, not fatal: the certificate
    /// renders without text, matching how the original treats a missing
    /// logo asset.
    pub fn new() -> Self {
        let fonts = match FontLibrary::load() {
            Ok(fonts) => Some(fonts),
            Err(e) => {
                log::warn!("Rendering without text: {e}");
                None
            }
        };
        Self { fonts, logo: None }
    }

    /// Create a renderer with explicit fonts (tests, embedded setups).
    pub fn with_fonts(fonts: FontLibrary) -> Self {
        Self {
            fonts: Some(fonts),
            logo: None,
        }
    }

    /// Whether text will actually be drawn.
    pub fn has_fonts(&self) -> bool {
        self.fonts.is_some()
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Decode the logo image once, up front. Failure leaves the renderer
    /// usable; the certificate simply renders without the logo.
    pub fn load_logo(&mut self, path: &Path) -> Result<(), RenderError> {
        let decoded = image::ImageReader::open(path)
            .map_err(|e| RenderError::LogoLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .decode()
            .map_err(|e| RenderError::LogoLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        self.logo = Some(decoded.to_rgba8());
        Ok(())
    }

    /// Render the full certificate at `scale` (1.0 = 794×1123).
    pub fn render(&self, input: &CertificateInput, scale: f32) -> RgbaImage {
        let (width, height) = scaled_size(scale);
        let mut canvas = Canvas::new(width, height, layout::BRAND_BLUE);
        let s = scale;
        let center_x = width as f32 / 2.0;

        self.draw_frame(&mut canvas, s);
        self.draw_logo(&mut canvas, s, center_x);

        let fonts = self.fonts.as_ref();

        // Title, two fixed lines.
        if let Some(fonts) = fonts {
            canvas.draw_text_centered(
                fonts.heavy(),
                layout::TITLE_SIZE * s,
                center_x,
                layout::TITLE_TOP * s,
                layout::WHITE,
                "Certificado de Ascenso",
                0.0,
            );
            canvas.draw_text_centered(
                fonts.heavy(),
                layout::TITLE_SIZE * s,
                center_x,
                (layout::TITLE_TOP + layout::TITLE_LINE_HEIGHT) * s,
                layout::WHITE,
                "de Categoría",
                0.0,
            );
        }

        // Lime separator bar.
        canvas.fill_rounded_rect(
            center_x - layout::SEPARATOR_WIDTH * s / 2.0,
            layout::SEPARATOR_TOP * s,
            layout::SEPARATOR_WIDTH * s,
            layout::SEPARATOR_HEIGHT * s,
            layout::SEPARATOR_RADIUS * s,
            layout::LIME,
        );

        if let Some(fonts) = fonts {
            canvas.draw_text_centered(
                fonts.bold(),
                layout::SUBTITLE_SIZE * s,
                center_x,
                layout::SUBTITLE_TOP * s,
                layout::white_alpha(180),
                "OTORGADO A",
                layout::SUBTITLE_TRACKING * s,
            );

            let name = if input.player_name().is_empty() {
                "Nombre del Jugador"
            } else {
                input.player_name()
            };
            canvas.draw_text_centered(
                fonts.heavy(),
                layout::NAME_SIZE * s,
                center_x,
                layout::NAME_TOP * s,
                layout::WHITE,
                name,
                0.0,
            );

            let description = [
                "Por su excelente desempeño y dedicación deportiva,".to_string(),
                format!(
                    "ha sido oficialmente {} a la categoría",
                    action_verb(input.modalidad())
                ),
            ];
            for (i, line) in description.iter().enumerate() {
                canvas.draw_text_centered(
                    fonts.regular(),
                    layout::DESCRIPTION_SIZE * s,
                    center_x,
                    (layout::DESCRIPTION_TOP + i as f32 * layout::DESCRIPTION_LINE_HEIGHT) * s,
                    layout::white_alpha(230),
                    line,
                    0.0,
                );
            }
        }

        self.draw_badge(&mut canvas, input, fonts, s, center_x);
        self.draw_footer(&mut canvas, input, fonts, s, center_x);

        canvas.into_image()
    }

    /// Convenience: render at the fixed export resolution (1588×2246).
    pub fn render_export(&self, input: &CertificateInput) -> RgbaImage {
        self.render(input, layout::EXPORT_PIXEL_RATIO)
    }

    /// Convenience: render at the preview scale.
    pub fn render_preview(&self, input: &CertificateInput) -> RgbaImage {
        self.render(input, layout::PREVIEW_SCALE)
    }

    /// Encode a rendered frame as JPEG at the fixed quality factor.
    pub fn encode_jpeg(&self, frame: &RgbaImage) -> Result<Vec<u8>, RenderError> {
        // JPEG has no alpha channel; the page is fully opaque anyway.
        let rgb = RgbImage::from_fn(frame.width(), frame.height(), |x, y| {
            let p = frame.get_pixel(x, y);
            Rgb([p.0[0], p.0[1], p.0[2]])
        });
        let mut out = Vec::new();
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
            Cursor::new(&mut out),
            layout::JPEG_QUALITY,
        );
        encoder.encode_image(&rgb)?;
        Ok(out)
    }

    fn draw_frame(&self, canvas: &mut Canvas, s: f32) {
        let (width, height) = (canvas.width() as f32, canvas.height() as f32);

        canvas.stroke_rect(
            layout::FRAME_INSET * s,
            layout::FRAME_INSET * s,
            width - 2.0 * layout::FRAME_INSET * s,
            height - 2.0 * layout::FRAME_INSET * s,
            layout::FRAME_THICKNESS * s,
            layout::white_alpha(90),
        );

        // Lime L-shaped accents in each corner.
        let inset = layout::CORNER_INSET * s;
        let arm = layout::CORNER_ARM * s;
        let t = layout::CORNER_THICKNESS * s;
        // Top-left.
        canvas.fill_rect(inset, inset, arm, t, layout::LIME);
        canvas.fill_rect(inset, inset, t, arm, layout::LIME);
        // Top-right.
        canvas.fill_rect(width - inset - arm, inset, arm, t, layout::LIME);
        canvas.fill_rect(width - inset - t, inset, t, arm, layout::LIME);
        // Bottom-left.
        canvas.fill_rect(inset, height - inset - t, arm, t, layout::LIME);
        canvas.fill_rect(inset, height - inset - arm, t, arm, layout::LIME);
        // Bottom-right.
        canvas.fill_rect(width - inset - arm, height - inset - t, arm, t, layout::LIME);
        canvas.fill_rect(width - inset - t, height - inset - arm, t, arm, layout::LIME);
    }

    fn draw_logo(&self, canvas: &mut Canvas, s: f32, center_x: f32) {
        let Some(logo) = &self.logo else { return };
        let target_h = (layout::LOGO_HEIGHT * s).round().max(1.0) as u32;
        let target_w = ((logo.width() as f32 / logo.height() as f32) * target_h as f32)
            .round()
            .max(1.0) as u32;
        let resized = image::imageops::resize(
            logo,
            target_w,
            target_h,
            image::imageops::FilterType::Triangle,
        );
        canvas.overlay(
            &resized,
            center_x - target_w as f32 / 2.0,
            layout::LOGO_TOP * s,
        );
    }

    fn draw_badge(
        &self,
        canvas: &mut Canvas,
        input: &CertificateInput,
        fonts: Option<&FontLibrary>,
        s: f32,
        center_x: f32,
    ) {
        let categoria = if input.categoria().is_empty() {
            "-"
        } else {
            input.categoria()
        };
        let modalidad = input.modalidad().label().to_uppercase();

        let content_w = fonts
            .map(|fonts| {
                let category_w =
                    Canvas::text_width(fonts.heavy(), layout::CATEGORY_SIZE * s, categoria, 0.0);
                let modality_w =
                    Canvas::text_width(fonts.bold(), layout::MODALITY_SIZE * s, &modalidad, 0.0);
                category_w.max(modality_w)
            })
            .unwrap_or(0.0)
            .max(layout::BADGE_MIN_WIDTH * s);
        let badge_w = content_w + 2.0 * layout::BADGE_PADDING_X * s;
        let badge_h = (2.0 * layout::BADGE_PADDING_Y
            + layout::CATEGORY_SIZE
            + layout::BADGE_DIVIDER_GAP
            + layout::BADGE_DIVIDER_THICKNESS
            + layout::MODALITY_GAP
            + layout::MODALITY_SIZE)
            * s;
        let badge_x = center_x - badge_w / 2.0;
        let badge_y = layout::BADGE_TOP * s;

        canvas.fill_rounded_rect(
            badge_x,
            badge_y,
            badge_w,
            badge_h,
            layout::BADGE_RADIUS * s,
            layout::LIME,
        );

        let category_y = badge_y + layout::BADGE_PADDING_Y * s;
        let divider_y = category_y + (layout::CATEGORY_SIZE + layout::BADGE_DIVIDER_GAP) * s;
        canvas.fill_rect(
            badge_x + layout::BADGE_PADDING_X * s,
            divider_y,
            content_w,
            layout::BADGE_DIVIDER_THICKNESS * s,
            layout::brand_blue_alpha(50),
        );

        if let Some(fonts) = fonts {
            canvas.draw_text_centered(
                fonts.heavy(),
                layout::CATEGORY_SIZE * s,
                center_x,
                category_y,
                layout::BRAND_BLUE,
                categoria,
                0.0,
            );
            canvas.draw_text_centered(
                fonts.bold(),
                layout::MODALITY_SIZE * s,
                center_x,
                divider_y + (layout::BADGE_DIVIDER_THICKNESS + layout::MODALITY_GAP) * s,
                layout::BRAND_BLUE,
                &modalidad,
                0.0,
            );
        }
    }

    fn draw_footer(
        &self,
        canvas: &mut Canvas,
        input: &CertificateInput,
        fonts: Option<&FontLibrary>,
        s: f32,
        center_x: f32,
    ) {
        canvas.fill_rect(
            center_x - layout::FOOTER_RULE_WIDTH * s / 2.0,
            layout::FOOTER_RULE_TOP * s,
            layout::FOOTER_RULE_WIDTH * s,
            layout::FOOTER_RULE_THICKNESS * s,
            layout::white_alpha(76),
        );

        let Some(fonts) = fonts else { return };

        let date_y = (layout::FOOTER_RULE_TOP + layout::DATE_GAP) * s;
        canvas.draw_text_centered(
            fonts.bold(),
            layout::DATE_SIZE * s,
            center_x,
            date_y,
            layout::WHITE,
            &formatted_fecha(input.fecha()),
            0.0,
        );

        canvas.draw_text_centered(
            fonts.regular(),
            layout::DATE_LABEL_SIZE * s,
            center_x,
            date_y + (layout::DATE_SIZE + layout::DATE_LABEL_GAP) * s,
            layout::white_alpha(180),
            "FECHA",
            layout::DATE_LABEL_TRACKING * s,
        );
    }
}

impl Default for CertificateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certipadel_core::Modalidad;
    use chrono::NaiveDate;

    fn input() -> CertificateInput {
        let mut input =
            CertificateInput::with_fecha(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        input.set_player_name("Juan Pérez");
        input.set_modalidad(Modalidad::Caballeros);
        input.set_categoria("C5");
        input
    }

    #[test]
    fn test_export_resolution() {
        let renderer = CertificateRenderer::new();
        let frame = renderer.render_export(&input());
        assert_eq!((frame.width(), frame.height()), (1588, 2246));
    }

    #[test]
    fn test_preview_resolution() {
        let renderer = CertificateRenderer::new();
        let frame = renderer.render_preview(&input());
        assert_eq!((frame.width(), frame.height()), (397, 562));
    }

    #[test]
    fn test_background_is_brand_blue() {
        let renderer = CertificateRenderer::new();
        let frame = renderer.render(&input(), 1.0);
        // Outside frame and corner accents.
        assert_eq!(frame.get_pixel(5, 5), &layout::BRAND_BLUE);
        assert_eq!(frame.get_pixel(frame.width() / 2, 5), &layout::BRAND_BLUE);
    }

    #[test]
    fn test_corner_accents_are_lime() {
        let renderer = CertificateRenderer::new();
        let frame = renderer.render(&input(), 1.0);
        assert_eq!(frame.get_pixel(14, 14), &layout::LIME);
        assert_eq!(frame.get_pixel(frame.width() - 15, 14), &layout::LIME);
    }

    #[test]
    fn test_badge_is_lime() {
        let renderer = CertificateRenderer::new();
        let frame = renderer.render(&input(), 1.0);
        // Center of the badge band, inside the minimum badge width.
        let badge_y = (layout::BADGE_TOP + layout::BADGE_PADDING_Y / 2.0) as u32;
        assert_eq!(frame.get_pixel(frame.width() / 2, badge_y), &layout::LIME);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = CertificateRenderer::new();
        let input = input();
        let a = renderer.render(&input, 1.0);
        let b = renderer.render(&input, 1.0);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_jpeg_has_soi_marker() {
        let renderer = CertificateRenderer::new();
        let frame = renderer.render(&input(), 0.25);
        let bytes = renderer.encode_jpeg(&frame).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_missing_logo_is_not_fatal() {
        let mut renderer = CertificateRenderer::new();
        let err = renderer.load_logo(Path::new("does/not/exist.png"));
        assert!(matches!(err, Err(RenderError::LogoLoad { .. })));
        assert!(!renderer.has_logo());
        // Still renders a full frame.
        let frame = renderer.render(&input(), 0.25);
        assert_eq!(frame.get_pixel(2, 2), &layout::BRAND_BLUE);
    }
}
