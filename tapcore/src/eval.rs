//! Equation evaluator.
//!
//! Evaluates the keypad's token alphabet (`0-9`, `.`, `+ - X /` and the
//! `sin`/`cos`/`tan` prefixes) in a single left-to-right pass: each
//! operator is applied to the running total and the next operand as soon
//! as it is read. There is no precedence and no grouping — `10/2X3` is 15.
//!
//! An operand group is an optional trig prefix followed by a digit run.
//! Trig prefixes take the following number in degrees. An empty digit run
//! reads as `0`, so `sin` alone is `sin(0°)` and a trailing operator adds
//! nothing. An empty equation evaluates to `0`.

use thiserror::Error;

/// π as used by the degree conversion (truncated, not `std::f64::consts::PI`).
const PI: f64 = 3.14159265;

/// Why an equation failed to evaluate.
///
/// The evaluator reads its input as a value and keeps no state, so a
/// failed call leaves the caller's equation text intact for correction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A digit run that is not a decimal literal, e.g. `1.2.3` or a lone `.`.
    #[error("not a number: {0}")]
    MalformedNumber(String),
    /// Something other than `+`, `-`, `X` or `/` where an operator belongs.
    /// Whitespace and the decorative parentheses land here too.
    #[error("not an operator: {0}")]
    UnrecognizedOperator(char),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn from_char(ch: char) -> Option<Op> {
        match ch {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            'X' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    /// Division is plain IEEE 754: dividing by zero yields ±∞ or NaN,
    /// never an error. The display layer renders non-finite results.
    fn apply(self, total: f64, operand: f64) -> f64 {
        match self {
            Op::Add => total + operand,
            Op::Sub => total - operand,
            Op::Mul => total * operand,
            Op::Div => total / operand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Func {
    Sin,
    Cos,
    Tan,
}

impl Func {
    /// Consume a `sin`/`cos`/`tan` prefix if one starts here.
    /// Only the exact lowercase spellings are recognized.
    fn strip(cursor: &mut Cursor) -> Option<Func> {
        for (name, func) in [("sin", Func::Sin), ("cos", Func::Cos), ("tan", Func::Tan)] {
            if cursor.strip(name) {
                return Some(func);
            }
        }
        None
    }

    /// Apply the function to a value given in degrees.
    fn apply_degrees(self, degrees: f64) -> f64 {
        let radians = degrees * PI / 180.0;
        match self {
            Func::Sin => radians.sin(),
            Func::Cos => radians.cos(),
            Func::Tan => radians.tan(),
        }
    }
}

/// Cursor over the equation text. Consumes from the front by re-slicing
/// the shared input, so nothing is copied or mutated.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Cursor { rest: src }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.rest.chars().next()?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }

    fn strip(&mut self, prefix: &str) -> bool {
        match self.rest.strip_prefix(prefix) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, ch)| !pred(ch))
            .map_or(self.rest.len(), |(i, _)| i);
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }
}

/// Evaluate an equation string to a double-precision result.
///
/// ```
/// assert_eq!(tapcore::evaluate("10/2X3").unwrap(), 15.0);
/// ```
pub fn evaluate(equation: &str) -> Result<f64, EvalError> {
    let mut cursor = Cursor::new(equation);
    let mut total = operand_group(&mut cursor)?;

    while let Some(ch) = cursor.bump() {
        let op = Op::from_char(ch).ok_or(EvalError::UnrecognizedOperator(ch))?;
        let operand = operand_group(&mut cursor)?;
        total = op.apply(total, operand);
        tracing::trace!(?op, operand, total, "reduce");
    }

    Ok(total)
}

/// Parse one operand group: optional trig prefix, then a run of digits
/// and dots. The run ends at the first character outside `0-9.`.
fn operand_group(cursor: &mut Cursor) -> Result<f64, EvalError> {
    let func = Func::strip(cursor);
    let digits = cursor.take_while(|ch| ch.is_ascii_digit() || ch == '.');

    let value = if digits.is_empty() {
        0.0
    } else {
        digits
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedNumber(digits.to_owned()))?
    };

    Ok(match func {
        Some(func) => func.apply_degrees(value),
        None => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition() {
        assert_eq!(evaluate("2+3").unwrap(), 5.0);
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        // (10/2)=5, then 5*3
        assert_eq!(evaluate("10/2X3").unwrap(), 15.0);
        assert_eq!(evaluate("2+3X4").unwrap(), 20.0);
    }

    #[test]
    fn test_subtraction_chain() {
        assert_eq!(evaluate("4-2-1").unwrap(), 1.0);
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(evaluate("5").unwrap(), 5.0);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("2.5+0.5").unwrap(), 3.0);
        assert_eq!(evaluate(".5X4").unwrap(), 2.0);
    }

    #[test]
    fn test_sin_degrees() {
        assert!((evaluate("sin90").unwrap() - 1.0).abs() < 1e-9);
        assert!(evaluate("sin0").unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_cos_and_tan_degrees() {
        assert!((evaluate("cos0").unwrap() - 1.0).abs() < 1e-9);
        assert!((evaluate("tan45").unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_prefix_without_digits_is_zero() {
        assert!(evaluate("sin").unwrap().abs() < 1e-12);
        assert!((evaluate("cos").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trig_result_feeds_reduction() {
        // sin(90°) = 1, then 1 + 2
        assert!((evaluate("sin90+2").unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_equation_is_zero() {
        assert_eq!(evaluate("").unwrap(), 0.0);
    }

    #[test]
    fn test_leading_minus_subtracts_from_zero() {
        assert_eq!(evaluate("-5").unwrap(), -5.0);
    }

    #[test]
    fn test_trailing_operator_adds_zero_operand() {
        assert_eq!(evaluate("2+").unwrap(), 2.0);
        assert_eq!(evaluate("2X").unwrap(), 0.0);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert!(evaluate("5/0").unwrap().is_infinite());
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_addition_chains_are_order_independent() {
        for eq in ["1+2+3", "3+2+1", "2+3+1"] {
            assert_eq!(evaluate(eq).unwrap(), 6.0);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(evaluate("7X6"), evaluate("7X6"));
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvalError::MalformedNumber("1.2.3".to_owned()))
        );
        assert_eq!(evaluate("."), Err(EvalError::MalformedNumber(".".to_owned())));
    }

    #[test]
    fn test_unrecognized_operator() {
        assert_eq!(evaluate("2^3"), Err(EvalError::UnrecognizedOperator('^')));
        // lowercase x is not the multiply token
        assert_eq!(evaluate("2x3"), Err(EvalError::UnrecognizedOperator('x')));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(evaluate("2 +3"), Err(EvalError::UnrecognizedOperator(' ')));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(evaluate("SIN90"), Err(EvalError::UnrecognizedOperator('S')));
    }

    #[test]
    fn test_parens_are_not_grammar() {
        assert_eq!(evaluate("(2+3)"), Err(EvalError::UnrecognizedOperator('(')));
    }
}
