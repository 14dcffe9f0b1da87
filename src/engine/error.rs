//! Calculation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the engine.
///
/// None of these are fatal: the engine shows its error token and the next
/// digit starts over.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CalcError {
    /// One or both operands are not numbers
    #[error("Cannot parse {} as a number", .operands.join(" and "))]
    ParseError { operands: Vec<String> },

    /// Division or remainder with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Token is not one of the keypad operators
    ///
    /// `fallback` is the second operand, which stays in effect. It is
    /// `None` when the token was parsed without any operand at hand.
    #[error("Unknown operator '{token}'")]
    InvalidOperator {
        token: String,
        fallback: Option<String>,
    },

    /// The operation has no numeric result, such as `Infinity - Infinity`
    #[error("{expression} is not a number")]
    Undefined { expression: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_lists_every_operand() {
        let err = CalcError::ParseError {
            operands: vec!["abc".to_string(), "-".to_string()],
        };
        assert_eq!(err.to_string(), "Cannot parse abc and - as a number");
    }

    #[test]
    fn division_by_zero_message_matches_log_line() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn errors_serialize_with_kind_tag() {
        let json = serde_json::to_value(CalcError::InvalidOperator {
            token: "^".to_string(),
            fallback: Some("3".to_string()),
        })
        .unwrap();

        assert_eq!(json["kind"], "InvalidOperator");
        assert_eq!(json["token"], "^");
        assert_eq!(json["fallback"], "3");
    }

    #[test]
    fn undefined_names_the_expression() {
        let err = CalcError::Undefined {
            expression: "Infinity * 0".to_string(),
        };
        assert_eq!(err.to_string(), "Infinity * 0 is not a number");
    }
}
