//! Core calculator values.
//!
//! This module holds the plain data the engine is built from:
//! - the operand entry buffer
//! - operator and control key tokens
//! - the phases of the input state machine and their history
//!
//! Nothing here performs I/O or logging.

mod history;
mod operand;
mod operator;
mod phase;

pub use history::{PhaseChange, PhaseHistory, Trigger};
pub use operand::Operand;
pub use operator::{Key, Operator};
pub use phase::Phase;
