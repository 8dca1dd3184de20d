//! tapcore — shared library for the TapCalc touchscreen calculator
//!
//! The equation evaluator plus the pieces the app shell is built from:
//! history, result formatting, preferences, theme, and keypad widgets.

pub mod display;
pub mod eval;
pub mod history;
pub mod prefs;
pub mod theme;
pub mod widgets;

pub use eval::{evaluate, EvalError};
pub use theme::TapTheme;
