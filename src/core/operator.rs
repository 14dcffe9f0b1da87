//! Operator and control key tokens.

use crate::engine::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Remainder,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Remainder,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
        }
    }

    /// Whether a zero right-hand side is rejected.
    pub fn rejects_zero_divisor(&self) -> bool {
        matches!(self, Self::Divide | Self::Remainder)
    }

    /// Apply the operator with plain IEEE-754 semantics.
    ///
    /// Zero divisors are not checked here; see [`crate::engine::evaluate`].
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Remainder => a % b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "%" => Ok(Self::Remainder),
            other => Err(CalcError::InvalidOperator {
                token: other.to_string(),
                fallback: None,
            }),
        }
    }
}

/// A key from the operator column of the keypad.
///
/// # Example
///
/// ```rust
/// use tallypad::core::{Key, Operator};
///
/// assert_eq!("*".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
/// assert_eq!("DEL".parse::<Key>().unwrap(), Key::Delete);
/// assert!("^".parse::<Key>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Operator(Operator),
    Clear,
    Delete,
}

impl Key {
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Clear | Self::Delete)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => op.fmt(f),
            Self::Clear => f.write_str("C"),
            Self::Delete => f.write_str("DEL"),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("c") || trimmed.eq_ignore_ascii_case("clear") {
            return Ok(Self::Clear);
        }
        if trimmed.eq_ignore_ascii_case("del") || trimmed.eq_ignore_ascii_case("delete") {
            return Ok(Self::Delete);
        }
        trimmed.parse::<Operator>().map(Self::Operator)
    }
}
