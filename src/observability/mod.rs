//! Observability subsystem for biblidx
//!
//! This module provides:
//! - Structured logging (JSON, stderr)
//! - Typed event names, each with a fixed severity
//! - Counters for simulation runs
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use biblidx::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SimulationStart, &[("steps", "15")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log an event with fields at the event's severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::emit(event, fields);
}
