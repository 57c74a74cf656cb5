//! Terminal output for the CLI.
//!
//! Human-readable lines go to stdout through the helpers below and are
//! silenced by `--quiet`. In `--json` mode stdout carries exactly one
//! document per command, written with [`json_output`]; the line helpers are
//! no-ops there and errors are reported on stderr as a JSON object.

use std::fmt::Display;

use owo_colors::OwoColorize;
use parking_lot::{const_rwlock, RwLock};
use rust_decimal::Decimal;
use serde_json::json;

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit one JSON document instead of human-readable text.
    pub json: bool,
    /// Suppress informational lines.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
    /// Style output with ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color,
        }
    }
}

static OUTPUT: RwLock<OutputConfig> = const_rwlock(OutputConfig::new(false, false, 0, false));

fn current() -> OutputConfig {
    *OUTPUT.read()
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

/// Whether informational lines should be printed.
fn informational() -> bool {
    let config = current();
    !config.json && !config.quiet
}

fn styled(value: impl Display, paint: impl FnOnce(&str) -> String) -> String {
    let value = value.to_string();
    let config = current();
    if config.json || !config.color {
        return value;
    }
    paint(&value)
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if informational() {
        println!("  {:<18} {}", muted(label), value);
    }
}

/// Print a success line.
pub fn success(message: &str) {
    if informational() {
        println!("  {} {message}", styled("✓", |s| s.green().to_string()));
    }
}

/// Print a warning. Shown even in quiet mode.
pub fn warning(message: &str) {
    if !is_json() {
        println!("  {} {message}", styled("⚠", |s| s.yellow().to_string()));
    }
}

/// Report an error on stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "error": message }));
        return;
    }
    eprintln!("  {} {message}", styled("×", |s| s.red().to_string()));
}

/// Print a section header preceded by a blank line.
pub fn section(title: &str) {
    if informational() {
        println!();
        println!("{}", styled(title, |s| s.bold().to_string()));
    }
}

/// Print a dimmed note.
pub fn note(message: &str) {
    if informational() {
        println!("  {}", muted(message));
    }
}

/// Print a `hint:` line suggesting a next command.
pub fn hint(message: &str) {
    if informational() {
        println!(
            "  {}: {}",
            styled("hint", |s| s.cyan().dimmed().to_string()),
            muted(message)
        );
    }
}

/// Print a block of text, one indented line at a time.
pub fn lines(content: &str) {
    if informational() {
        for line in content.lines() {
            println!("  {line}");
        }
    }
}

/// Write the command's JSON document to stdout.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

pub fn positive(value: impl Display) -> String {
    styled(value, |s| s.green().to_string())
}

pub fn negative(value: impl Display) -> String {
    styled(value, |s| s.red().to_string())
}

pub fn highlight(value: impl Display) -> String {
    styled(value, |s| s.cyan().to_string())
}

pub fn muted(value: impl Display) -> String {
    styled(value, |s| s.dimmed().to_string())
}

/// Color `text` by the sign of `value`: green above zero, red below.
pub fn by_sign(value: Decimal, text: impl Display) -> String {
    if value > Decimal::ZERO {
        positive(text)
    } else if value < Decimal::ZERO {
        negative(text)
    } else {
        text.to_string()
    }
}
