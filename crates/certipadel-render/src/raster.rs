//! Low-level pixel canvas.
//!
//! A thin drawing surface over an RGBA buffer: rectangle and rounded
//! rectangle fills, alpha blending, image overlay, and glyph rasterization
//! with optional letter spacing. Everything the certificate layout needs,
//! nothing more.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// Drawing surface with a fixed size and background.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with the background color.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Consume the canvas, returning the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Source-over blend of `color` at `(x, y)`, with `coverage` further
    /// scaling the color's own alpha. Out-of-bounds writes are dropped.
    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let alpha = (color.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        let inv = 1.0 - alpha;
        for c in 0..3 {
            dst.0[c] = (color.0[c] as f32 * alpha + dst.0[c] as f32 * inv).round() as u8;
        }
        dst.0[3] = 255;
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
        self.fill_rounded_rect(x, y, w, h, 0.0, color);
    }

    /// Fill a rectangle with rounded corners. Corner coverage is computed
    /// per pixel for a softly antialiased edge.
    pub fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgba<u8>) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let radius = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        let x0 = x.floor() as i64;
        let y0 = y.floor() as i64;
        let x1 = (x + w).ceil() as i64;
        let y1 = (y + h).ceil() as i64;

        for py in y0..y1 {
            for px in x0..x1 {
                // Pixel center in canvas space.
                let cx = px as f32 + 0.5;
                let cy = py as f32 + 0.5;
                let coverage = if radius > 0.0 {
                    // Distance from the nearest corner arc center, when the
                    // pixel sits inside a corner square.
                    let dx = (x + radius - cx).max(cx - (x + w - radius)).max(0.0);
                    let dy = (y + radius - cy).max(cy - (y + h - radius)).max(0.0);
                    let dist = (dx * dx + dy * dy).sqrt();
                    (radius - dist + 0.5).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                // Clip straight edges to the unrounded bounds.
                let edge = (cx - x + 0.5)
                    .min(x + w - cx + 0.5)
                    .min(cy - y + 0.5)
                    .min(y + h - cy + 0.5)
                    .clamp(0.0, 1.0);
                self.blend(px, py, color, coverage.min(edge));
            }
        }
    }

    /// Stroke the outline of a rectangle (inward strokes).
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Rgba<u8>) {
        self.fill_rect(x, y, w, thickness, color);
        self.fill_rect(x, y + h - thickness, w, thickness, color);
        self.fill_rect(x, y + thickness, thickness, h - 2.0 * thickness, color);
        self.fill_rect(x + w - thickness, y + thickness, thickness, h - 2.0 * thickness, color);
    }

    /// Alpha-composite another RGBA image at `(x, y)`.
    pub fn overlay(&mut self, src: &RgbaImage, x: f32, y: f32) {
        let ox = x.round() as i64;
        let oy = y.round() as i64;
        for (sx, sy, pixel) in src.enumerate_pixels() {
            self.blend(ox + sx as i64, oy + sy as i64, *pixel, 1.0);
        }
    }

    /// Advance width of `text` at `px` pixels, including letter spacing
    /// between glyphs.
    pub fn text_width(font: &Font<'static>, px: f32, text: &str, letter_spacing: f32) -> f32 {
        let scale = Scale::uniform(px);
        let mut width = 0.0;
        let mut count = 0usize;
        for ch in text.chars() {
            width += font.glyph(ch).scaled(scale).h_metrics().advance_width;
            count += 1;
        }
        if count > 1 {
            width += letter_spacing * (count - 1) as f32;
        }
        width
    }

    /// Draw a line of text with its top edge at `y`, left edge at `x`.
    pub fn draw_text(
        &mut self,
        font: &Font<'static>,
        px: f32,
        x: f32,
        y: f32,
        color: Rgba<u8>,
        text: &str,
        letter_spacing: f32,
    ) {
        let scale = Scale::uniform(px);
        let v_metrics = font.v_metrics(scale);
        let baseline = y + v_metrics.ascent;
        let mut caret = x;

        for ch in text.chars() {
            let glyph = font.glyph(ch).scaled(scale).positioned(point(caret, baseline));
            let advance = glyph.unpositioned().h_metrics().advance_width;
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.blend(
                        gx as i64 + bb.min.x as i64,
                        gy as i64 + bb.min.y as i64,
                        color,
                        v,
                    );
                });
            }
            caret += advance + letter_spacing;
        }
    }

    /// Draw a line of text horizontally centered on `center_x`.
    pub fn draw_text_centered(
        &mut self,
        font: &Font<'static>,
        px: f32,
        center_x: f32,
        y: f32,
        color: Rgba<u8>,
        text: &str,
        letter_spacing: f32,
    ) {
        let width = Self::text_width(font, px, text, letter_spacing);
        self.draw_text(font, px, center_x - width / 2.0, y, color, text, letter_spacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([10, 20, 30, 255]);
    const RED: Rgba<u8> = Rgba([200, 0, 0, 255]);

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(8, 8, BG);
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(0, 0), &BG);
        assert_eq!(img.get_pixel(7, 7), &BG);
    }

    #[test]
    fn test_fill_rect_covers_interior_only() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.fill_rect(5.0, 5.0, 10.0, 10.0, RED);
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(10, 10), &RED);
        assert_eq!(img.get_pixel(2, 2), &BG);
        assert_eq!(img.get_pixel(17, 17), &BG);
    }

    #[test]
    fn test_fill_rect_clips_out_of_bounds() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.fill_rect(-5.0, -5.0, 30.0, 30.0, RED);
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(0, 0), &RED);
        assert_eq!(img.get_pixel(9, 9), &RED);
    }

    #[test]
    fn test_rounded_rect_leaves_corners() {
        let mut canvas = Canvas::new(40, 40, BG);
        canvas.fill_rounded_rect(0.0, 0.0, 40.0, 40.0, 12.0, RED);
        let img = canvas.into_image();
        // Center filled, extreme corner still background-dominated.
        assert_eq!(img.get_pixel(20, 20), &RED);
        assert_eq!(img.get_pixel(0, 0), &BG);
    }

    #[test]
    fn test_blend_respects_alpha() {
        let mut canvas = Canvas::new(4, 4, Rgba([0, 0, 0, 255]));
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0, Rgba([255, 255, 255, 128]));
        let img = canvas.into_image();
        let p = img.get_pixel(2, 2);
        assert!(p.0[0] > 100 && p.0[0] < 155, "expected ~half blend, got {p:?}");
    }

    #[test]
    fn test_overlay_composites() {
        let mut canvas = Canvas::new(10, 10, BG);
        let src = RgbaImage::from_pixel(2, 2, RED);
        canvas.overlay(&src, 4.0, 4.0);
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(4, 4), &RED);
        assert_eq!(img.get_pixel(6, 6), &BG);
    }
}
