//! The keypad state machine.

use super::error::CalcError;
use super::evaluate::{evaluate, format_number};
use crate::core::{Key, Operand, Operator, Phase, PhaseChange, PhaseHistory, Trigger};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Token shown on the display after a failed evaluation.
pub const DEFAULT_ERROR_TOKEN: &str = "Error";

/// Number of phase changes an engine keeps.
pub const HISTORY_LIMIT: usize = 256;

/// Message handed back by a transition for the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Report {
    /// An evaluation happened
    Info(String),
    /// The input was rejected or the evaluation failed
    Failure(CalcError),
}

/// What the presentation layer reads back after each input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub display: String,
    pub report: Option<Report>,
}

impl Feedback {
    pub fn error(&self) -> Option<&CalcError> {
        match &self.report {
            Some(Report::Failure(err)) => Some(err),
            _ => None,
        }
    }
}

/// Serializable copy of the engine fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pending_operand: String,
    pub stored_operand: String,
    pub pending_operator: Option<Operator>,
    pub reset_on_next_digit: bool,
    pub phase: Phase,
    pub display: String,
}

/// Left operand and the operator waiting for a right operand.
///
/// Kept together so an operator can never exist without a stored operand.
#[derive(Clone, Debug, PartialEq)]
struct Pending {
    operand: Operand,
    operator: Operator,
}

/// Keypad calculator engine.
///
/// Owns all input state. Each `submit_*` call runs to completion and
/// returns the new display together with an optional report.
///
/// # Example
///
/// ```rust
/// use tallypad::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.submit_digit('1');
/// calc.submit_digit('2');
/// calc.submit_operator("+");
/// calc.submit_digit('3');
/// let feedback = calc.submit_equals();
///
/// assert_eq!(feedback.display, "15");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    current: Operand,
    pending: Option<Pending>,
    reset_on_next_digit: bool,
    phase: Phase,
    history: PhaseHistory,
    error_token: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_error_token(DEFAULT_ERROR_TOKEN)
    }

    /// Create an engine that shows `token` after a failed evaluation.
    pub fn with_error_token(token: impl Into<String>) -> Self {
        Self {
            current: Operand::new(),
            pending: None,
            reset_on_next_digit: false,
            phase: Phase::Idle,
            history: PhaseHistory::with_limit(HISTORY_LIMIT),
            error_token: token.into(),
        }
    }

    /// Current display text. An empty operand shows as `"0"`.
    pub fn display(&self) -> String {
        if self.current.is_empty() {
            "0".to_string()
        } else {
            self.current.to_string()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn error_token(&self) -> &str {
        &self.error_token
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pending_operand: self.current.to_string(),
            stored_operand: self
                .pending
                .as_ref()
                .map(|p| p.operand.to_string())
                .unwrap_or_default(),
            pending_operator: self.pending.as_ref().map(|p| p.operator),
            reset_on_next_digit: self.reset_on_next_digit,
            phase: self.phase,
            display: self.display(),
        }
    }

    /// Enter a digit or decimal point.
    ///
    /// A second `.` in the same operand and any non-keypad character are
    /// ignored.
    pub fn submit_digit(&mut self, digit: char) -> Feedback {
        if !Operand::accepts(digit) {
            warn!(%digit, "ignoring non-digit input");
            return self.feedback(None);
        }

        if self.reset_on_next_digit {
            self.current.clear();
            self.reset_on_next_digit = false;
        }

        if !self.current.push(digit) {
            debug!(operand = %self.current, "second decimal point ignored");
        }

        self.enter(Phase::OperandEntry, Trigger::Digit(digit));
        self.feedback(None)
    }

    /// Handle an operator or control token such as `"+"`, `"C"` or `"DEL"`.
    ///
    /// An unknown token is reported as [`CalcError::InvalidOperator`], with
    /// the displayed operand as its fallback, and leaves every field
    /// untouched.
    pub fn submit_operator(&mut self, token: &str) -> Feedback {
        match token.parse::<Key>() {
            Ok(key) => self.press(key),
            Err(_) => {
                let err = CalcError::InvalidOperator {
                    token: token.trim().to_string(),
                    fallback: Some(self.display()),
                };
                warn!(%err, "rejected operator token");
                self.feedback(Some(Report::Failure(err)))
            }
        }
    }

    /// Typed form of [`Calculator::submit_operator`].
    pub fn press(&mut self, key: Key) -> Feedback {
        match key {
            Key::Clear => {
                self.clear();
                self.feedback(None)
            }
            Key::Delete => self.delete(),
            Key::Operator(op) => self.choose_operator(op),
        }
    }

    /// Apply the pending operator to the stored and current operands.
    ///
    /// Does nothing unless an operator is pending and a new operand was
    /// entered after it.
    pub fn submit_equals(&mut self) -> Feedback {
        if self.reset_on_next_digit {
            return self.feedback(None);
        }
        let Some(pending) = self.pending.take() else {
            return self.feedback(None);
        };

        let (lhs, op, rhs) = (pending.operand, pending.operator, self.current.clone());
        match evaluate(lhs.as_str(), op, rhs.as_str()) {
            Ok(value) => {
                let result = format_number(value);
                let message = format!("Result: {lhs} {op} {rhs} = {result}");
                debug!(%message, "evaluated");

                self.current = Operand::from_text(result);
                self.reset_on_next_digit = true;
                self.enter(Phase::OperandEntry, Trigger::Equals);
                self.feedback(Some(Report::Info(message)))
            }
            Err(err) => self.fail(err, Trigger::Equals),
        }
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        self.current.clear();
        self.pending = None;
        self.reset_on_next_digit = false;
        self.enter(Phase::Idle, Trigger::Key(Key::Clear));
    }

    fn delete(&mut self) -> Feedback {
        let trigger = Trigger::Key(Key::Delete);
        match self.phase {
            Phase::Error => {
                self.current = Operand::from_text("0");
                self.enter(Phase::OperandEntry, trigger);
            }
            Phase::Idle => {
                self.current.backspace();
                self.enter(Phase::OperandEntry, trigger);
            }
            Phase::OperandEntry | Phase::OperatorPending => self.current.backspace(),
        }
        self.feedback(None)
    }

    fn choose_operator(&mut self, op: Operator) -> Feedback {
        if self.current.is_empty() || !self.phase.accepts_operator() {
            debug!(%op, phase = %self.phase, "operator ignored");
            return self.feedback(None);
        }

        let mut report = None;
        match self.pending.take() {
            Some(pending) => {
                let (lhs, prev, rhs) = (pending.operand, pending.operator, self.current.clone());
                match evaluate(lhs.as_str(), prev, rhs.as_str()) {
                    Ok(value) => {
                        let result = format_number(value);
                        let message = format!("Calculation: {lhs} {prev} {rhs} = {result}");
                        debug!(%message, "chained evaluation");
                        self.current = Operand::from_text(result);
                        report = Some(Report::Info(message));
                    }
                    Err(err) => return self.fail(err, Trigger::Key(Key::Operator(op))),
                }
            }
            None => {}
        }

        self.pending = Some(Pending {
            operand: self.current.clone(),
            operator: op,
        });
        self.reset_on_next_digit = true;
        self.enter(Phase::OperatorPending, Trigger::Key(Key::Operator(op)));
        self.feedback(report)
    }

    fn fail(&mut self, err: CalcError, trigger: Trigger) -> Feedback {
        warn!(%err, "evaluation failed");
        self.current = Operand::from_text(self.error_token.clone());
        self.pending = None;
        self.reset_on_next_digit = true;
        self.enter(Phase::Error, trigger);
        self.feedback(Some(Report::Failure(err)))
    }

    fn enter(&mut self, to: Phase, trigger: Trigger) {
        if to == self.phase {
            return;
        }
        let change = PhaseChange {
            from: self.phase,
            to,
            trigger,
            timestamp: Utc::now(),
        };
        debug!(%change, "phase change");
        self.history = self.history.record(change);
        self.phase = to;
    }

    fn feedback(&self, report: Option<Report>) -> Feedback {
        Feedback {
            display: self.display(),
            report,
        }
    }
}
