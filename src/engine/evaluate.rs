//! Single binary evaluation: parse both operands, then compute.

use super::error::CalcError;
use crate::core::Operator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Parse one operand, collecting the offending text on failure.
///
/// NaN is rejected even though the float parser accepts it.
fn parse_operand(text: &str) -> Validation<f64, NonEmptyVec<String>> {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Validation::success(value),
        _ => Validation::fail(text.to_string()),
    }
}

/// Parse both operands, reporting every one that fails.
fn parse_operands(a: &str, b: &str) -> Result<(f64, f64), CalcError> {
    match Validation::all_vec(vec![parse_operand(a), parse_operand(b)]) {
        Validation::Success(values) => Ok((values[0], values[1])),
        Validation::Failure(bad) => Err(CalcError::ParseError {
            operands: bad.iter().cloned().collect(),
        }),
    }
}

/// Evaluate `a op b`.
///
/// # Example
///
/// ```rust
/// use tallypad::core::Operator;
/// use tallypad::engine::{evaluate, CalcError};
///
/// assert_eq!(evaluate("12", Operator::Add, "3"), Ok(15.0));
/// assert_eq!(evaluate("5", Operator::Divide, "0"), Err(CalcError::DivisionByZero));
/// assert!(matches!(
///     evaluate("x", Operator::Add, "1"),
///     Err(CalcError::ParseError { .. })
/// ));
/// ```
pub fn evaluate(a: &str, op: Operator, b: &str) -> Result<f64, CalcError> {
    let (lhs, rhs) = parse_operands(a, b)?;

    if op.rejects_zero_divisor() && rhs == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let value = op.apply(lhs, rhs);
    if value.is_nan() {
        return Err(CalcError::Undefined {
            expression: format!("{} {op} {}", format_number(lhs), format_number(rhs)),
        });
    }
    Ok(value)
}

/// Evaluate with an operator given as text.
///
/// An unrecognized operator is reported as [`CalcError::InvalidOperator`]
/// carrying the second operand as its fallback. Operand errors are
/// reported first.
pub fn evaluate_token(a: &str, token: &str, b: &str) -> Result<f64, CalcError> {
    match token.parse::<Operator>() {
        Ok(op) => evaluate(a, op, b),
        Err(_) => {
            let (_, rhs) = parse_operands(a, b)?;
            warn!(%token, fallback = rhs, "unrecognized operator");
            Err(CalcError::InvalidOperator {
                token: token.trim().to_string(),
                fallback: Some(format_number(rhs)),
            })
        }
    }
}

/// Render a result for the display.
///
/// Integral values print without a fraction, negative zero prints as `0`
/// and infinities print as `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
