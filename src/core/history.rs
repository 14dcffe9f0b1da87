//! Phase change history.
//!
//! Every transition that moves the engine to a different phase is recorded
//! as an immutable [`PhaseChange`]. The history itself is a value: `record`
//! returns a new history and leaves the original untouched.

use super::operator::Key;
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The input that caused a phase change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Digit(char),
    Key(Key),
    Equals,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Key(key) => key.fmt(f),
            Self::Equals => f.write_str("="),
        }
    }
}

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use tallypad::core::{Phase, PhaseChange, Trigger};
/// use chrono::Utc;
///
/// let change = PhaseChange {
///     from: Phase::Idle,
///     to: Phase::OperandEntry,
///     trigger: Trigger::Digit('7'),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(change.to_string(), "Idle -[7]-> OperandEntry");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseChange {
    /// Phase before the input
    pub from: Phase,
    /// Phase after the input
    pub to: Phase,
    /// The input that caused it
    pub trigger: Trigger,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.trigger, self.to)
    }
}

/// Ordered history of phase changes.
///
/// # Example
///
/// ```rust
/// use tallypad::core::{Phase, PhaseChange, PhaseHistory, Trigger};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseChange {
///     from: Phase::Idle,
///     to: Phase::OperandEntry,
///     trigger: Trigger::Digit('1'),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![Phase::Idle, Phase::OperandEntry]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    changes: Vec<PhaseChange>,
    #[serde(default)]
    limit: Option<usize>,
}

impl PhaseHistory {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            limit: None,
        }
    }

    /// History that keeps only the newest `limit` changes.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            changes: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a change, returning a new history.
    ///
    /// With a limit set, the oldest changes are dropped once it is reached.
    pub fn record(&self, change: PhaseChange) -> Self {
        let skip = match self.limit {
            Some(limit) if self.changes.len() >= limit => self.changes.len() + 1 - limit,
            _ => 0,
        };
        let mut changes = Vec::with_capacity(self.changes.len() + 1 - skip);
        changes.extend(self.changes.iter().skip(skip).cloned());
        changes.push(change);
        Self {
            changes,
            limit: self.limit,
        }
    }

    /// Phases traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|change| change.to));
        path
    }

    /// Time between the first and last recorded change.
    ///
    /// `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of recorded changes into the error phase.
    pub fn error_count(&self) -> usize {
        self.changes.iter().filter(|c| c.to.is_error()).count()
    }

    pub fn last(&self) -> Option<&PhaseChange> {
        self.changes.last()
    }

    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn change(from: Phase, to: Phase, trigger: Trigger) -> PhaseChange {
        PhaseChange {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PhaseHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = PhaseHistory::new();
        let next = history.record(change(
            Phase::Idle,
            Phase::OperandEntry,
            Trigger::Digit('4'),
        ));

        assert_eq!(history.len(), 0);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn limited_history_keeps_newest_changes() {
        let mut history = PhaseHistory::with_limit(3);
        for d in ['1', '2', '3', '4', '5'] {
            history = history.record(change(Phase::Idle, Phase::OperandEntry, Trigger::Digit(d)));
        }

        assert_eq!(history.len(), 3);
        let triggers: Vec<_> = history.changes().iter().map(|c| c.trigger).collect();
        assert_eq!(
            triggers,
            vec![Trigger::Digit('3'), Trigger::Digit('4'), Trigger::Digit('5')]
        );
    }

    #[test]
    fn zero_limit_still_keeps_last_change() {
        let history = PhaseHistory::with_limit(0)
            .record(change(Phase::Idle, Phase::OperandEntry, Trigger::Digit('1')))
            .record(change(Phase::OperandEntry, Phase::Idle, Trigger::Key(Key::Clear)));

        assert_eq!(history.limit(), Some(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|c| c.to), Some(Phase::Idle));
    }

    #[test]
    fn path_follows_recorded_changes() {
        let history = PhaseHistory::new()
            .record(change(Phase::Idle, Phase::OperandEntry, Trigger::Digit('5')))
            .record(change(
                Phase::OperandEntry,
                Phase::OperatorPending,
                Trigger::Key(Key::Operator(Operator::Divide)),
            ))
            .record(change(
                Phase::OperatorPending,
                Phase::OperandEntry,
                Trigger::Digit('0'),
            ))
            .record(change(Phase::OperandEntry, Phase::Error, Trigger::Equals));

        assert_eq!(
            history.path(),
            vec![
                Phase::Idle,
                Phase::OperandEntry,
                Phase::OperatorPending,
                Phase::OperandEntry,
                Phase::Error,
            ]
        );
        assert_eq!(history.error_count(), 1);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = PhaseHistory::new()
            .record(PhaseChange {
                from: Phase::Idle,
                to: Phase::OperandEntry,
                trigger: Trigger::Digit('1'),
                timestamp: start,
            })
            .record(PhaseChange {
                from: Phase::OperandEntry,
                to: Phase::Idle,
                trigger: Trigger::Key(Key::Clear),
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn change_display_names_the_trigger() {
        let c = change(Phase::OperandEntry, Phase::Idle, Trigger::Key(Key::Clear));
        assert_eq!(c.to_string(), "OperandEntry -[C]-> Idle");

        let c = change(Phase::OperandEntry, Phase::Error, Trigger::Equals);
        assert_eq!(c.to_string(), "OperandEntry -[=]-> Error");
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            PhaseHistory::new().record(change(Phase::Idle, Phase::OperandEntry, Trigger::Digit('9')));

        let json = serde_json::to_string(&history).unwrap();
        let back: PhaseHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(back, history);
    }
}
