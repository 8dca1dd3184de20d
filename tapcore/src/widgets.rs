//! Keypad widgets — finger-sized keys with press feedback.

use egui::{Response, Sense, Ui, Vec2, Widget};

use crate::theme::TapColors;

/// A single keypad key. Fills exactly the cell it is given and darkens
/// while held, so a touch visibly registers before the finger lifts.
pub struct KeypadKey<'a> {
    label: &'a str,
    size: Vec2,
    accent: bool,
    font_size: f32,
}

impl<'a> KeypadKey<'a> {
    pub fn new(label: &'a str, size: Vec2) -> Self {
        Self {
            label,
            size,
            accent: false,
            font_size: 26.0,
        }
    }

    /// Operator styling.
    pub fn accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Widget for KeypadKey<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.is_pointer_button_down_on() {
                TapColors::KEY_PRESSED
            } else if response.hovered() {
                if self.accent { TapColors::KEY_ACCENT_HOVER } else { TapColors::KEY_HOVER }
            } else if self.accent {
                TapColors::KEY_ACCENT
            } else {
                TapColors::KEY
            };

            let painter = ui.painter();
            painter.rect_filled(rect, egui::Rounding::same(8.0), fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                TapColors::KEY_TEXT,
            );
        }

        response
    }
}
