//! Fixed layout parameters of the certificate page.
//!
//! All lengths are logical pixels on a 794×1123 page (A4 at ~96 DPI) and are
//! multiplied by the render scale. The values mirror the high-resolution
//! certificate design: brand-blue page, lime accents, centered column.

use image::Rgba;

/// Logical page width (A4 at ~96 DPI).
pub const PAGE_WIDTH: u32 = 794;
/// Logical page height (A4 at ~96 DPI).
pub const PAGE_HEIGHT: u32 = 1123;

/// Pixel-density multiplier applied for export, for sharpness on retina
/// displays. The exported file is 1588×2246.
pub const EXPORT_PIXEL_RATIO: f32 = 2.0;
/// Scale of the in-app preview render.
pub const PREVIEW_SCALE: f32 = 0.5;
/// JPEG quality factor (0.95 in the 0..1 convention).
pub const JPEG_QUALITY: u8 = 95;

/// Brand background blue (#0B38D6).
pub const BRAND_BLUE: Rgba<u8> = Rgba([0x0B, 0x38, 0xD6, 0xFF]);
/// Accent lime (#C9FD2E) used for the separator, badge and corner accents.
pub const LIME: Rgba<u8> = Rgba([0xC9, 0xFD, 0x2E, 0xFF]);
pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// White with the given alpha, for muted text and rules.
pub const fn white_alpha(alpha: u8) -> Rgba<u8> {
    Rgba([0xFF, 0xFF, 0xFF, alpha])
}

/// Brand blue with the given alpha (badge divider line).
pub const fn brand_blue_alpha(alpha: u8) -> Rgba<u8> {
    Rgba([0x0B, 0x38, 0xD6, alpha])
}

// Frame and corner decorations.
pub const FRAME_INSET: f32 = 20.0;
pub const FRAME_THICKNESS: f32 = 2.0;
pub const CORNER_INSET: f32 = 12.0;
pub const CORNER_ARM: f32 = 46.0;
pub const CORNER_THICKNESS: f32 = 5.0;

// Header.
pub const LOGO_TOP: f32 = 100.0;
pub const LOGO_HEIGHT: f32 = 100.0;

// Body column (top-down flow, all centered horizontally).
pub const TITLE_TOP: f32 = 250.0;
pub const TITLE_SIZE: f32 = 42.0;
pub const TITLE_LINE_HEIGHT: f32 = 50.0;

pub const SEPARATOR_TOP: f32 = 372.0;
pub const SEPARATOR_WIDTH: f32 = 397.0;
pub const SEPARATOR_HEIGHT: f32 = 5.0;
pub const SEPARATOR_RADIUS: f32 = 2.5;

pub const SUBTITLE_TOP: f32 = 417.0;
pub const SUBTITLE_SIZE: f32 = 18.0;
/// Letter spacing of the `OTORGADO A` label (0.2 em).
pub const SUBTITLE_TRACKING: f32 = 0.2 * SUBTITLE_SIZE;

pub const NAME_TOP: f32 = 455.0;
pub const NAME_SIZE: f32 = 64.0;

pub const DESCRIPTION_TOP: f32 = 559.0;
pub const DESCRIPTION_SIZE: f32 = 20.0;
pub const DESCRIPTION_LINE_HEIGHT: f32 = 30.0;

// Badge (lime rounded rectangle with category over modality).
pub const BADGE_TOP: f32 = 659.0;
pub const BADGE_RADIUS: f32 = 32.0;
pub const BADGE_PADDING_X: f32 = 60.0;
pub const BADGE_PADDING_Y: f32 = 40.0;
pub const BADGE_MIN_WIDTH: f32 = 220.0;
pub const CATEGORY_SIZE: f32 = 90.0;
pub const BADGE_DIVIDER_GAP: f32 = 15.0;
pub const BADGE_DIVIDER_THICKNESS: f32 = 2.0;
pub const MODALITY_GAP: f32 = 10.0;
pub const MODALITY_SIZE: f32 = 22.0;

// Footer (date over its label, above the bottom padding).
pub const FOOTER_RULE_WIDTH: f32 = 400.0;
pub const FOOTER_RULE_THICKNESS: f32 = 2.0;
pub const FOOTER_RULE_TOP: f32 = 985.0;
pub const DATE_SIZE: f32 = 24.0;
pub const DATE_GAP: f32 = 15.0;
pub const DATE_LABEL_SIZE: f32 = 14.0;
pub const DATE_LABEL_GAP: f32 = 5.0;
/// Letter spacing of the `FECHA` label (0.1 em).
pub const DATE_LABEL_TRACKING: f32 = 0.1 * DATE_LABEL_SIZE;

/// Output dimension for a given scale, rounded to whole pixels.
pub fn scaled_size(scale: f32) -> (u32, u32) {
    (
        (PAGE_WIDTH as f32 * scale).round().max(1.0) as u32,
        (PAGE_HEIGHT as f32 * scale).round().max(1.0) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_size_is_a4_at_pixel_ratio() {
        assert_eq!(scaled_size(EXPORT_PIXEL_RATIO), (1588, 2246));
    }

    #[test]
    fn test_preview_size() {
        assert_eq!(scaled_size(PREVIEW_SCALE), (397, 562));
    }

    #[test]
    fn test_scaled_size_never_zero() {
        assert_eq!(scaled_size(0.0001), (1, 1));
    }
}
