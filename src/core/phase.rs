//! Phases of the keypad state machine.
//!
//! A phase is a pure description of where the engine is in the input
//! cycle. The engine tracks it next to its operand fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the calculator is in the input cycle.
///
/// ```text
/// Idle ──digit──▶ OperandEntry ──operator──▶ OperatorPending
///                      ▲                          │
///                      └──────────digit───────────┘
/// OperandEntry / OperatorPending ──failed evaluation──▶ Error
/// Error ──digit──▶ OperandEntry          any ──clear──▶ Idle
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered since start or the last clear.
    #[default]
    Idle,
    /// An operand is being typed, or a result is on display.
    OperandEntry,
    /// An operator was chosen and the next digit starts the right operand.
    OperatorPending,
    /// The last evaluation failed and the error token is on display.
    Error,
}

impl Phase {
    /// Name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::OperandEntry => "OperandEntry",
            Self::OperatorPending => "OperatorPending",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Whether an arithmetic operator can be taken in this phase.
    pub fn accepts_operator(&self) -> bool {
        matches!(self, Self::OperandEntry | Self::OperatorPending)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
