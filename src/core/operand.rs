//! Operand entry buffer.
//!
//! Operands are held as text while the user types them. The buffer only
//! grows through [`Operand::push`], which refuses a second decimal point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operand as typed on the keypad.
///
/// # Example
///
/// ```rust
/// use tallypad::core::Operand;
///
/// let mut operand = Operand::new();
/// assert!(operand.push('1'));
/// assert!(operand.push('.'));
/// assert!(!operand.push('.'));
/// assert!(operand.push('5'));
/// assert_eq!(operand.as_str(), "1.5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Replace the buffer with already-rendered text, such as a result
    /// or the error token.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Whether `c` is a keypad digit this buffer can take.
    pub fn accepts(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }

    /// Append a keypad digit.
    ///
    /// Returns `false` and leaves the buffer untouched when `c` is not a
    /// keypad digit or is a second `.`.
    pub fn push(&mut self, c: char) -> bool {
        if !Self::accepts(c) || (c == '.' && self.has_point()) {
            return false;
        }
        self.0.push(c);
        true
    }

    /// Drop the last character. An emptied buffer becomes `"0"`.
    pub fn backspace(&mut self) {
        self.0.pop();
        if self.0.is_empty() {
            self.0.push('0');
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn has_point(&self) -> bool {
        self.0.contains('.')
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
