//! TapCalc theme — high contrast, finger-sized targets.
//!
//! Everything scales from one user preference so the whole UI grows
//! together on small or far-away screens.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Application palette.
pub struct TapColors;

impl TapColors {
    /// Slate backdrop behind the history pane.
    pub const BACKDROP: Color32 = Color32::from_rgb(114, 144, 154);
    /// Keypad tray at the bottom of the screen.
    pub const KEYPAD_BG: Color32 = Color32::from_rgb(32, 36, 42);
    pub const KEY: Color32 = Color32::from_rgb(58, 63, 70);
    pub const KEY_HOVER: Color32 = Color32::from_rgb(74, 80, 88);
    pub const KEY_PRESSED: Color32 = Color32::from_rgb(104, 112, 122);
    /// Operator keys (`/ X - + =`).
    pub const KEY_ACCENT: Color32 = Color32::from_rgb(214, 120, 50);
    pub const KEY_ACCENT_HOVER: Color32 = Color32::from_rgb(230, 142, 74);
    pub const KEY_TEXT: Color32 = Color32::WHITE;
    /// Equation rows in the history pane.
    pub const EQUATION_TEXT: Color32 = Color32::WHITE;
    /// Result rows in the history pane.
    pub const RESULT_TEXT: Color32 = Color32::from_rgb(0, 128, 0);
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(170, 40, 30);
}

/// Theme configuration. All sizes are pre-scaled; build with
/// [`TapTheme::scaled`] from the preference value.
pub struct TapTheme {
    pub font_size_body: f32,
    pub font_size_equation: f32,
    pub font_size_keypad: f32,
    pub key_height: f32,
    pub spacing: f32,
}

impl Default for TapTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_equation: 30.0,
            font_size_keypad: 26.0,
            key_height: 64.0,
            spacing: 6.0,
        }
    }
}

impl TapTheme {
    /// Derive a theme from the preferred font scale, clamped so a bad
    /// preferences file can't produce an unusable UI.
    pub fn scaled(scale: f32) -> Self {
        let scale = if scale.is_finite() { scale.clamp(0.5, 2.0) } else { 1.0 };
        let base = Self::default();
        Self {
            font_size_body: base.font_size_body * scale,
            font_size_equation: base.font_size_equation * scale,
            font_size_keypad: base.font_size_keypad * scale,
            key_height: base.key_height * scale,
            spacing: base.spacing * scale,
        }
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body * 0.8, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_equation, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();
        visuals.panel_fill = TapColors::BACKDROP;
        visuals.window_fill = Color32::from_rgb(40, 44, 52);
        visuals.window_rounding = Rounding::same(10.0);
        visuals.window_stroke = Stroke::new(1.0, Color32::from_rgb(20, 22, 26));
        visuals.menu_rounding = Rounding::same(6.0);
        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(self.spacing, self.spacing);
        style.spacing.button_padding = egui::vec2(14.0, 10.0);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_clamps_bad_preference_values() {
        assert_eq!(TapTheme::scaled(50.0).key_height, TapTheme::default().key_height * 2.0);
        assert_eq!(TapTheme::scaled(0.0).key_height, TapTheme::default().key_height * 0.5);
        assert_eq!(TapTheme::scaled(f32::NAN).key_height, TapTheme::default().key_height);
    }
}
