//! Button components: filled primary and secondary text buttons.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui};

use crate::{sizing, theme};

/// A filled, brand-colored action button. Renders greyed-out and inert when
/// disabled.
pub struct PrimaryButton<'a> {
    label: &'a str,
    enabled: bool,
    min_width: f32,
}

impl<'a> PrimaryButton<'a> {
    /// Create a new primary button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            min_width: 0.0,
        }
    }

    /// Enable or disable the button. A disabled button never reports clicks.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Reserve at least this width, so busy-state relabeling does not make
    /// the button jump.
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let text_width = ui
            .painter()
            .layout_no_wrap(
                self.label.to_string(),
                egui::FontId::proportional(14.0),
                Color32::WHITE,
            )
            .size()
            .x;
        let size = vec2(
            (text_width + 28.0).max(self.min_width),
            sizing::BUTTON_HEIGHT,
        );
        let sense = if self.enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if !self.enabled {
                theme::DISABLED_BG
            } else if response.hovered() {
                theme::BRAND_BLUE_HOVER
            } else {
                theme::BRAND_BLUE
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            let text_color = if self.enabled {
                Color32::WHITE
            } else {
                Color32::from_gray(245)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                text_color,
            );
        }

        if self.enabled {
            let clicked = response.clicked();
            response.on_hover_cursor(CursorIcon::PointingHand);
            clicked
        } else {
            false
        }
    }
}

/// A flat, bordered button for secondary actions (e.g. copy-to-clipboard).
pub struct SecondaryButton<'a> {
    label: &'a str,
    highlighted: bool,
}

impl<'a> SecondaryButton<'a> {
    /// Create a new secondary button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            highlighted: false,
        }
    }

    /// Draw in the accent color (transient confirmation state).
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width().max(80.0), 28.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.highlighted {
                theme::LIME
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                egui::Stroke::new(1.0, theme::BORDER),
                egui::StrokeKind::Inside,
            );

            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(12.0),
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
