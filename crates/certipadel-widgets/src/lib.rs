//! Reusable egui widget components with the CertiPadel brand styling.
//!
//! - **Buttons**: filled primary/secondary text buttons
//! - **Layout**: section labels, separators, panel frames

pub mod buttons;
pub mod layout;

pub use buttons::{PrimaryButton, SecondaryButton};
pub use layout::{panel_frame, section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Standard button height
    pub const BUTTON_HEIGHT: f32 = 34.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 6;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(40, 44, 58);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 126, 140);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 222, 232);
    /// Brand blue (certificate background, primary actions)
    pub const BRAND_BLUE: Color32 = Color32::from_rgb(0x0B, 0x38, 0xD6);
    /// Brand blue, hover shade
    pub const BRAND_BLUE_HOVER: Color32 = Color32::from_rgb(0x20, 0x4B, 0xE3);
    /// Accent lime (certificate highlight)
    pub const LIME: Color32 = Color32::from_rgb(0xC9, 0xFD, 0x2E);
    /// Disabled fill
    pub const DISABLED_BG: Color32 = Color32::from_rgb(205, 209, 220);
    /// Hover background for flat controls
    pub const HOVER_BG: Color32 = Color32::from_rgb(243, 244, 248);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(252, 252, 254, 250);
}
