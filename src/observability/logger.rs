//! Structured JSON log lines
//!
//! One line per event: `{"event":..,"severity":..}` followed by the
//! event's fields sorted by key. Lines below the process-wide threshold
//! are dropped before they are formatted.
//!
//! Logs go to stderr; stdout belongs to command output.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-step simulation detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Trace,
            1 => Severity::Info,
            2 => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

static MIN_SEVERITY: AtomicU8 = AtomicU8::new(Severity::Info as u8);

/// Process-wide structured logger
pub struct Logger;

impl Logger {
    /// Set the lowest severity that is written
    pub fn set_min_severity(severity: Severity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    pub fn min_severity() -> Severity {
        Severity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether a line at `severity` would be written
    pub fn enabled(severity: Severity) -> bool {
        severity >= Self::min_severity()
    }

    /// Write `event` to stderr at its own severity.
    pub fn emit(event: Event, fields: &[(&str, &str)]) {
        if !Self::enabled(event.severity()) {
            return;
        }
        let line = Self::format_line(event, fields);
        // A failed log write must not fail the command.
        let _ = io::stderr().lock().write_all(line.as_bytes());
    }

    /// Render the newline-terminated JSON line for `event`.
    pub fn format_line(event: Event, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        let mut line = format!(
            "{{\"event\":{},\"severity\":{}",
            quoted(event.as_str()),
            quoted(event.severity().as_str())
        );
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&quoted(key));
            line.push(':');
            line.push_str(&quoted(value));
        }
        line.push_str("}\n");
        line
    }
}

/// `s` as a JSON string literal
fn quoted(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
