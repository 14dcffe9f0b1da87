//! A calculator session: engine, activity log and theme in one place.

use super::config::{ConfigError, SessionConfig};
use super::log::ActivityLog;
use crate::core::{Key, Operand, Operator};
use crate::engine::{evaluate, format_number, Calculator, Feedback, Report};
use tracing::{debug, info};
use uuid::Uuid;

/// Theme button label while dark mode is on.
pub const LIGHT_MODE_LABEL: &str = "☀️ Light Mode";
/// Theme button label while dark mode is off.
pub const DARK_MODE_LABEL: &str = "🌙 Dark Mode";

/// Drives one [`Calculator`] from keypad presses and keeps the log that a
/// front end shows beside it.
///
/// ```rust
/// use tallypad::shell::Session;
///
/// let mut session = Session::default();
/// for token in ["1", "2", "+", "3", "="] {
///     session.press(token);
/// }
///
/// assert_eq!(session.display(), "15");
/// assert!(session.log().messages().any(|m| m == "Result: 12 + 3 = 15"));
/// ```
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    calculator: Calculator,
    log: ActivityLog,
    dark_mode: bool,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_config(SessionConfig::default())
    }
}

impl Session {
    /// Start a session, rejecting a config that fails validation.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SessionConfig) -> Self {
        let log = match config.log_capacity {
            Some(capacity) => ActivityLog::with_capacity(capacity),
            None => ActivityLog::new(),
        };
        let mut session = Self {
            id: Uuid::new_v4(),
            calculator: Calculator::with_error_token(config.error_token.clone()),
            log,
            dark_mode: false,
            config,
        };
        info!(session = %session.id, name = %session.config.name, "session started");
        let welcome = format!(
            "Welcome to {} v{}",
            session.config.name, session.config.version
        );
        session.log.push_info(welcome);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn display(&self) -> String {
        self.calculator.display()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Log lines rendered with the configured time format.
    pub fn render_log(&self) -> Result<Vec<String>, ConfigError> {
        self.log.render(&self.config.time_format)
    }

    /// Dispatch one keypad token: a digit, `.`, `=`, or anything the
    /// operator column understands.
    pub fn press(&mut self, token: &str) -> Feedback {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() || c == '.' => self.press_digit(c),
            (Some('='), None) => self.press_equals(),
            _ => self.press_operator(trimmed),
        }
    }

    /// Enter a digit or `.`. Characters outside the keypad are not logged.
    pub fn press_digit(&mut self, digit: char) -> Feedback {
        let feedback = self.calculator.submit_digit(digit);
        if Operand::accepts(digit) {
            self.log.push_info(format!("Number pressed: {digit}"));
        }
        self.note(&feedback);
        feedback
    }

    pub fn press_operator(&mut self, token: &str) -> Feedback {
        let feedback = self.calculator.submit_operator(token);
        self.note(&feedback);
        if let Ok(Key::Operator(op)) = token.parse::<Key>() {
            self.log.push_info(format!("Operator selected: {op}"));
        }
        feedback
    }

    pub fn press_equals(&mut self) -> Feedback {
        let feedback = self.calculator.submit_equals();
        self.note(&feedback);
        feedback
    }

    /// Flip dark mode and return the new theme button label.
    pub fn toggle_theme(&mut self) -> &'static str {
        self.dark_mode = !self.dark_mode;
        let state = if self.dark_mode { "enabled" } else { "disabled" };
        debug!(session = %self.id, dark_mode = self.dark_mode, "theme toggled");
        self.log.push_info(format!("Dark mode {state}"));
        if self.dark_mode {
            LIGHT_MODE_LABEL
        } else {
            DARK_MODE_LABEL
        }
    }

    /// Write the walkthrough of session settings and sample output to the
    /// log. The engine is not touched.
    pub fn run_demo(&mut self) {
        debug!(session = %self.id, "running demo");
        let name = self.config.name.clone();
        self.log.push_info(format!("===== Starting {name} Demo ====="));
        self.log.push_info(format!("Calculator Name: {name}"));
        self.log.push_info(format!("Version: {}", self.config.version));
        let symbols: Vec<_> = Operator::ALL.iter().map(Operator::symbol).collect();
        self.log.push_info(format!("Operations: {}", symbols.join(", ")));

        let number = 7;
        if number > 5 {
            self.log.push_info(format!("Conditional: {number} is greater than 5"));
        } else {
            self.log.push_info(format!("Conditional: {number} is 5 or less"));
        }

        match evaluate("10", Operator::Multiply, "5") {
            Ok(area) => self.log.push_info(format!(
                "Function Demo: Area calculation (10 * 5) = {}",
                format_number(area)
            )),
            Err(err) => self.log.push_error(format!("Error: {err}")),
        }

        self.log.push_info("Loop Demonstrations:");
        self.log.push_info("For Loop Results:");
        for i in 1..=5 {
            self.log.push_info(format!("Iteration {i}"));
        }
        self.log.push_info("While Loop Results:");
        let mut count = 1;
        while count <= 3 {
            self.log.push_info(format!("Count: {count}"));
            count += 1;
        }
        self.log.push_info("Array forEach Results:");
        for (index, fruit) in ["Apple", "Banana", "Cherry"].iter().enumerate() {
            self.log.push_info(format!("{}. {fruit}", index + 1));
        }
        self.log.push_info("===== Demo Completed =====");
    }

    /// Empty the log, leaving a single note that it was cleared.
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.log.push_info("Output cleared");
    }

    fn note(&mut self, feedback: &Feedback) {
        match &feedback.report {
            Some(Report::Info(message)) => self.log.push_info(message.clone()),
            Some(Report::Failure(err)) => self.log.push_error(format!("Error: {err}")),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Severity;

    fn press_all(session: &mut Session, tokens: &[&str]) {
        for token in tokens {
            session.press(token);
        }
    }

    #[test]
    fn session_starts_with_welcome_line() {
        let session = Session::default();
        let first = session.log().entries().front().unwrap();
        assert_eq!(first.message, "Welcome to Calculator v1.0");
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn welcome_uses_configured_name() {
        let config = SessionConfig {
            name: "JS Calculator".to_string(),
            ..SessionConfig::default()
        };
        let session = Session::new(config).unwrap();
        assert_eq!(
            session.log().messages().next(),
            Some("Welcome to JS Calculator v1.0")
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SessionConfig {
            log_capacity: Some(0),
            ..SessionConfig::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn presses_are_logged_in_order() {
        let mut session = Session::default();
        press_all(&mut session, &["1", "2", "+", "3", "="]);

        let messages: Vec<_> = session.log().messages().skip(1).collect();
        assert_eq!(
            messages,
            vec![
                "Number pressed: 1",
                "Number pressed: 2",
                "Operator selected: +",
                "Number pressed: 3",
                "Result: 12 + 3 = 15",
            ]
        );
    }

    #[test]
    fn chained_calculation_logged_before_operator() {
        let mut session = Session::default();
        press_all(&mut session, &["2", "*", "4", "-"]);

        let messages: Vec<_> = session.log().messages().rev().take(2).collect();
        assert_eq!(
            messages,
            vec!["Operator selected: -", "Calculation: 2 * 4 = 8"]
        );
    }

    #[test]
    fn control_keys_are_not_logged_as_operators() {
        let mut session = Session::default();
        press_all(&mut session, &["5", "DEL", "C"]);

        assert!(!session
            .log()
            .messages()
            .any(|m| m.starts_with("Operator selected")));
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn division_by_zero_is_logged_as_error() {
        let mut session = Session::default();
        press_all(&mut session, &["5", "/", "0", "="]);

        let last = session.log().entries().back().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.message, "Error: Division by zero");
        assert_eq!(session.display(), "Error");
    }

    #[test]
    fn unknown_operator_is_logged_as_error() {
        let mut session = Session::default();
        press_all(&mut session, &["5", "^"]);

        let last = session.log().entries().back().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.message, "Error: Unknown operator '^'");
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn toggle_theme_flips_and_labels() {
        let mut session = Session::default();

        assert_eq!(session.toggle_theme(), LIGHT_MODE_LABEL);
        assert!(session.is_dark_mode());
        assert_eq!(session.toggle_theme(), DARK_MODE_LABEL);
        assert!(!session.is_dark_mode());

        let messages: Vec<_> = session.log().messages().skip(1).collect();
        assert_eq!(messages, vec!["Dark mode enabled", "Dark mode disabled"]);
    }

    #[test]
    fn theme_does_not_touch_engine() {
        let mut session = Session::default();
        press_all(&mut session, &["4", "+"]);
        let before = session.calculator().snapshot();

        session.toggle_theme();
        assert_eq!(session.calculator().snapshot(), before);
    }

    #[test]
    fn clear_log_leaves_single_note() {
        let mut session = Session::default();
        press_all(&mut session, &["1", "2"]);
        session.clear_log();

        let messages: Vec<_> = session.log().messages().collect();
        assert_eq!(messages, vec!["Output cleared"]);
        assert_eq!(session.display(), "12");
    }

    #[test]
    fn log_capacity_is_applied() {
        let config = SessionConfig {
            log_capacity: Some(3),
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        press_all(&mut session, &["1", "2", "3", "4"]);

        assert_eq!(session.log().len(), 3);
        assert_eq!(session.log().messages().next(), Some("Number pressed: 2"));
    }

    #[test]
    fn rendered_log_has_one_line_per_entry() {
        let mut session = Session::default();
        press_all(&mut session, &["7"]);

        let lines = session.render_log().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("ℹ️ Number pressed: 7"));
    }

    #[test]
    fn non_keypad_characters_are_not_logged() {
        let mut session = Session::default();
        let before = session.log().len();

        let feedback = session.press_digit('x');
        assert_eq!(feedback.display, "0");
        assert_eq!(session.log().len(), before);

        session.press_digit('.');
        assert_eq!(session.log().messages().last(), Some("Number pressed: ."));
    }

    #[test]
    fn demo_logs_walkthrough_in_order() {
        let config = SessionConfig {
            name: "JS Calculator".to_string(),
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        press_all(&mut session, &["4", "+"]);
        let before = session.calculator().snapshot();
        let start = session.log().len();

        session.run_demo();

        let messages: Vec<_> = session.log().messages().skip(start).collect();
        assert_eq!(
            messages,
            vec![
                "===== Starting JS Calculator Demo =====",
                "Calculator Name: JS Calculator",
                "Version: 1.0",
                "Operations: +, -, *, /, %",
                "Conditional: 7 is greater than 5",
                "Function Demo: Area calculation (10 * 5) = 50",
                "Loop Demonstrations:",
                "For Loop Results:",
                "Iteration 1",
                "Iteration 2",
                "Iteration 3",
                "Iteration 4",
                "Iteration 5",
                "While Loop Results:",
                "Count: 1",
                "Count: 2",
                "Count: 3",
                "Array forEach Results:",
                "1. Apple",
                "2. Banana",
                "3. Cherry",
                "===== Demo Completed =====",
            ]
        );
        assert_eq!(session.calculator().snapshot(), before);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(Session::default().id(), Session::default().id());
    }
}
