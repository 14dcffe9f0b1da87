//! The calculator engine.
//!
//! The engine turns keypad input into display text. Each input is handled
//! synchronously and completely by one of the transition functions on
//! [`Calculator`]:
//!
//! - [`Calculator::submit_digit`] for `0`-`9` and `.`
//! - [`Calculator::submit_operator`] for `+ - * / %` and the `C`/`DEL` keys
//! - [`Calculator::submit_equals`] for `=`
//!
//! Failures never escape as panics. They come back as a [`Report::Failure`]
//! inside the returned [`Feedback`] while the display shows the error token.

mod error;
mod evaluate;
mod machine;

pub use error::CalcError;
pub use evaluate::{evaluate, evaluate_token, format_number};
pub use machine::{Calculator, Feedback, Report, Snapshot, DEFAULT_ERROR_TOKEN, HISTORY_LIMIT};
