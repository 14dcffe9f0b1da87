//! Tallypad: a keypad calculator engine
//!
//! Tallypad models the classic four-function keypad (plus remainder) as a
//! small synchronous state machine. The engine is a plain value that owns
//! its input state and is driven one key at a time; a thin shell adds the
//! timestamped activity log and theme flag a front end displays.
//!
//! # Core Concepts
//!
//! - **Operand**: text typed on the keypad, at most one decimal point
//! - **Phase**: Idle, OperandEntry, OperatorPending or Error
//! - **Feedback**: the display text plus an optional report after each key
//! - **Session**: engine, activity log and theme for one user
//!
//! Each evaluation is a single binary operation. There is no precedence,
//! no parentheses and no multi-step expression parsing.
//!
//! # Example
//!
//! ```rust
//! use tallypad::engine::{CalcError, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.submit_digit('5');
//! calc.submit_operator("/");
//! calc.submit_digit('0');
//! let feedback = calc.submit_equals();
//!
//! assert_eq!(feedback.display, "Error");
//! assert_eq!(feedback.error(), Some(&CalcError::DivisionByZero));
//!
//! // the next digit starts over
//! assert_eq!(calc.submit_digit('2').display, "2");
//! ```

pub mod core;
pub mod engine;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{Key, Operator, Phase};
pub use engine::{CalcError, Calculator, Feedback, Report};
pub use shell::{Session, SessionConfig};
