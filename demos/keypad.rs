//! Keypad Replay
//!
//! This example replays keypad presses through a session and prints the
//! display after each key followed by the activity log.
//!
//! Key concepts:
//! - One `Session` per user, driven one token at a time
//! - Failures come back as reports, never as panics
//! - `RUST_LOG=tallypad=debug` shows every phase change
//!
//! Run with: cargo run --example keypad -- 1 2 + 3 = / 0 =
//! Add `--demo` to append the settings walkthrough to the log.

use tallypad::engine::Report;
use tallypad::shell::{Session, SessionConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Replay ===\n");

    let mut tokens: Vec<String> = std::env::args().skip(1).collect();
    let with_demo = tokens.iter().any(|t| t == "--demo");
    tokens.retain(|t| t != "--demo");
    if tokens.is_empty() {
        tokens = "1 2 + 3 = / 0 = 7 * 6 ="
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    let config = match std::env::var("TALLYPAD_CONFIG") {
        Ok(path) => match SessionConfig::from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        Err(_) => SessionConfig::default(),
    };
    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    for token in &tokens {
        let feedback = session.press(token);
        let note = match &feedback.report {
            Some(Report::Info(message)) => format!("  ({message})"),
            Some(Report::Failure(err)) => format!("  (error: {err})"),
            None => String::new(),
        };
        println!("{token:>6} -> {:>12}{note}", feedback.display);
    }

    if with_demo {
        session.run_demo();
    }

    println!("\nPhase: {}", session.calculator().phase());
    println!("\n=== Activity Log ===\n");
    match session.render_log() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}
