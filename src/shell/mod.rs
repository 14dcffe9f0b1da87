//! The shell around the engine.
//!
//! A [`Session`] is what a front end talks to: it forwards key presses to
//! the [`Calculator`](crate::engine::Calculator), turns the engine's reports
//! into [`ActivityLog`] entries, and holds the light/dark theme flag. None
//! of the shell state feeds back into the engine.

mod config;
mod log;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use log::{ActivityLog, LogEntry, Severity};
pub use session::{Session, DARK_MODE_LABEL, LIGHT_MODE_LABEL};
