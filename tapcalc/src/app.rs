//! TapCalc application
//!
//! Equation entry via the on-screen keypad, a scrolling history pane, and
//! the tapcore evaluator behind the `=` key. All mutable state lives here
//! and is rendered fresh each frame.

use egui::{Context, Key, RichText, ScrollArea, Vec2};
use tapcore::display::format_result;
use tapcore::eval;
use tapcore::history::History;
use tapcore::prefs::Prefs;
use tapcore::theme::{TapColors, TapTheme};
use tapcore::widgets::KeypadKey;

pub struct TapCalcApp {
    /// Characters accumulated from key presses, exactly as typed.
    equation: String,
    /// Error text from the last `=` press; cleared on the next edit.
    error: Option<String>,
    history: History,
    prefs: Prefs,
    theme: TapTheme,
    show_about: bool,
}

impl TapCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, prefs: Prefs) -> Self {
        Self {
            equation: String::new(),
            error: None,
            history: History::new(prefs.history_limit),
            theme: TapTheme::scaled(prefs.font_scale),
            prefs,
            show_about: false,
        }
    }

    fn append_char(&mut self, ch: char) {
        self.equation.push(ch);
        self.error = None;
    }

    fn append_str(&mut self, token: &str) {
        self.equation.push_str(token);
        self.error = None;
    }

    fn delete_last(&mut self) {
        self.equation.pop();
        self.error = None;
    }

    fn clear(&mut self) {
        self.equation.clear();
        self.error = None;
    }

    fn equals(&mut self) {
        match eval::evaluate(&self.equation) {
            Ok(value) => {
                let result = format_result(value);
                self.history.push(std::mem::take(&mut self.equation), result);
                self.error = None;
            }
            Err(err) => {
                // Leave the equation as typed so it can be corrected.
                self.error = Some(err.to_string());
            }
        }
    }

    fn set_font_scale(&mut self, ctx: &Context, scale: f32) {
        self.prefs.font_scale = scale;
        self.theme = TapTheme::scaled(scale);
        self.theme.apply(ctx);
        self.save_prefs();
    }

    fn set_history_limit(&mut self, limit: usize) {
        self.prefs.history_limit = limit;
        self.history.set_limit(limit);
        self.save_prefs();
    }

    fn save_prefs(&self) {
        if let Err(err) = self.prefs.save() {
            tracing::warn!(%err, "could not save preferences");
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if !i.modifiers.shift {
                for digit in '0'..='9' {
                    if i.key_pressed(digit_to_key(digit)) {
                        self.append_char(digit);
                    }
                }
            }

            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.append_char('+');
            }
            if i.key_pressed(Key::Minus) {
                self.append_char('-');
            }
            // `*` arrives as shift+8 on most layouts; the letter works too.
            if (i.modifiers.shift && i.key_pressed(Key::Num8)) || i.key_pressed(Key::X) {
                self.append_char('X');
            }
            if i.key_pressed(Key::Slash) {
                self.append_char('/');
            }
            if i.key_pressed(Key::Period) {
                self.append_char('.');
            }

            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.equals();
            }
            if i.key_pressed(Key::Backspace) {
                self.delete_last();
            }
            if i.key_pressed(Key::Escape) {
                self.clear();
            }
        });
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        let equation_font = egui::FontId::proportional(self.theme.font_size_equation);

        // Current entry line, with a cursor glyph so it reads as editable.
        let entry = format!("{}_", self.equation);
        ui.label(
            RichText::new(entry)
                .font(equation_font.clone())
                .color(TapColors::EQUATION_TEXT),
        );
        if let Some(error) = &self.error {
            ui.label(
                RichText::new(error)
                    .font(egui::FontId::proportional(self.theme.font_size_body))
                    .color(TapColors::ERROR_TEXT),
            );
        }

        ui.separator();

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for entry in self.history.newest_first() {
                ui.label(
                    RichText::new(&entry.equation)
                        .font(equation_font.clone())
                        .color(TapColors::EQUATION_TEXT),
                );
                ui.label(
                    RichText::new(&entry.result)
                        .font(equation_font.clone())
                        .color(TapColors::RESULT_TEXT),
                );
                ui.add_space(self.theme.spacing);
            }
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = self.theme.spacing;
        ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

        let key_w = (ui.available_width() - spacing * 3.0) / 4.0;
        let size = Vec2::new(key_w, self.theme.key_height);
        let font = self.theme.font_size_keypad;

        ui.horizontal(|ui| {
            for prefix in ["sin", "cos", "tan"] {
                if ui.add(KeypadKey::new(prefix, size).font_size(font)).clicked() {
                    self.append_str(prefix);
                }
            }
            if ui.add(KeypadKey::new("del", size).font_size(font)).clicked() {
                self.delete_last();
            }
        });

        ui.horizontal(|ui| {
            if ui.add(KeypadKey::new("c", size).font_size(font)).clicked() {
                self.clear();
            }
            // Parenthesis keys are drawn to match the faceplate but do
            // nothing: the grammar is strictly left-to-right.
            ui.add(KeypadKey::new("(", size).font_size(font));
            ui.add(KeypadKey::new(")", size).font_size(font));
            if ui.add(KeypadKey::new("/", size).accent(true).font_size(font)).clicked() {
                self.append_char('/');
            }
        });

        for row in [["7", "8", "9", "X"], ["4", "5", "6", "-"], ["1", "2", "3", "+"]] {
            ui.horizontal(|ui| {
                for label in row {
                    let accent = matches!(label, "X" | "-" | "+");
                    if ui.add(KeypadKey::new(label, size).accent(accent).font_size(font)).clicked() {
                        self.append_str(label);
                    }
                }
            });
        }

        ui.horizontal(|ui| {
            let wide = Vec2::new(key_w * 2.0 + spacing, self.theme.key_height);
            if ui.add(KeypadKey::new("0", wide).font_size(font)).clicked() {
                self.append_char('0');
            }
            if ui.add(KeypadKey::new(".", size).font_size(font)).clicked() {
                self.append_char('.');
            }
            if ui.add(KeypadKey::new("=", size).accent(true).font_size(font)).clicked() {
                self.equals();
            }
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about tapcalc")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("tapcalc");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("a touchscreen calculator");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("sin, cos and tan take degrees.");
                ui.label("operators apply left to right, no precedence.");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for TapCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("calc", |ui| {
                    if ui.button("clear equation").clicked() {
                        self.clear();
                        ui.close_menu();
                    }
                    if ui.button("clear history").clicked() {
                        self.history.clear();
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    for (label, scale) in [("small", 0.85), ("normal", 1.0), ("large", 1.25)] {
                        let selected = (self.prefs.font_scale - scale).abs() < 0.01;
                        if ui.selectable_label(selected, label).clicked() {
                            self.set_font_scale(ctx, scale);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    for limit in [25usize, 100, 500] {
                        let label = format!("keep {limit} calculations");
                        if ui.selectable_label(self.history.limit() == limit, label).clicked() {
                            self.set_history_limit(limit);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let keypad_height = self.theme.key_height * 6.0 + self.theme.spacing * 7.0;
        egui::TopBottomPanel::bottom("keypad")
            .exact_height(keypad_height)
            .frame(
                egui::Frame::none()
                    .fill(TapColors::KEYPAD_BG)
                    .inner_margin(egui::Margin::same(self.theme.spacing)),
            )
            .show(ctx, |ui| {
                self.render_keypad(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(TapColors::BACKDROP)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_history(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

fn digit_to_key(digit: char) -> Key {
    match digit {
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        _ => Key::Num0,
    }
}
