//! Timestamped activity log shown next to the keypad.

use super::config::{check_time_format, ConfigError};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::Write as _;

/// Kind of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Error => "❌",
        }
    }
}

/// A single line in the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    /// Render as `[time] icon message`, with the time in local time.
    ///
    /// Fails with [`ConfigError::Invalid`] if `time_format` is not a
    /// pattern chrono can render.
    pub fn render(&self, time_format: &str) -> Result<String, ConfigError> {
        check_time_format(time_format)?;
        let mut line = String::new();
        write!(
            line,
            "[{}] {} {}",
            self.timestamp.with_timezone(&Local).format(time_format),
            self.severity.icon(),
            self.message
        )
        .map_err(|_| ConfigError::Invalid {
            field: "time_format",
            reason: format!("'{time_format}' could not be rendered"),
        })?;
        Ok(line)
    }
}

/// Ordered log of info and error messages.
///
/// With a capacity set, pushing onto a full log drops the oldest entry.
///
/// ```rust
/// use tallypad::shell::{ActivityLog, Severity};
///
/// let mut log = ActivityLog::new();
/// log.push_info("Number pressed: 7");
/// log.push_error("Error: Division by zero");
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.entries().back().unwrap().severity, Severity::Error);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: Option<usize>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity.max(1)),
        }
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    fn push(&mut self, severity: Severity, message: String) {
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(LogEntry {
            timestamp: Utc::now(),
            severity,
            message,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn messages(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One rendered line per entry, oldest first.
    pub fn render(&self, time_format: &str) -> Result<Vec<String>, ConfigError> {
        self.entries.iter().map(|e| e.render(time_format)).collect()
    }
}
