//! Display formatting for results.

/// Format a result for the display line and history rows.
///
/// Locale-independent. Non-finite values render as text: the evaluator
/// passes division by zero straight through as IEEE infinity or NaN, and
/// the pane has to show *something* sensible for them.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "Error".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_owned();
    }
    // Whole numbers print without a fractional part.
    if value.fract() == 0.0 && value.abs() < 1e12 {
        return format!("{}", value as i64);
    }
    // Magnitudes a 9-digit display can't hold go to exponent notation.
    if value.abs() >= 1e12 || value.abs() < 1e-6 {
        return format!("{value:e}");
    }
    let text = format!("{value:.9}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
