//! Observability events for biblidx
//!
//! Every structured log line is named by one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Simulation configuration loaded from a file
    ConfigLoaded,
    /// Seed books loaded from a file
    BooksLoaded,
    /// Library built from seed books
    CatalogSeeded,

    // Simulation
    /// Simulation run begins
    SimulationStart,
    /// One simulated event completed
    SimulationEvent,
    /// Simulation run complete
    SimulationComplete,
    /// A simulated lookup found a book that must not exist
    SimulationAnomaly,

    // CLI
    /// Command finished
    CommandComplete,
    /// Command failed
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BooksLoaded => "BOOKS_LOADED",
            Event::CatalogSeeded => "CATALOG_SEEDED",

            Event::SimulationStart => "SIMULATION_START",
            Event::SimulationEvent => "SIMULATION_EVENT",
            Event::SimulationComplete => "SIMULATION_COMPLETE",
            Event::SimulationAnomaly => "SIMULATION_ANOMALY",

            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::CommandFailed => Severity::Error,
            Event::SimulationAnomaly => Severity::Warn,
            Event::SimulationEvent => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::BooksLoaded,
            Event::CatalogSeeded,
            Event::SimulationStart,
            Event::SimulationEvent,
            Event::SimulationComplete,
            Event::SimulationAnomaly,
            Event::CommandComplete,
            Event::CommandFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severities() {
        assert_eq!(Event::CommandFailed.severity(), Severity::Error);
        assert_eq!(Event::SimulationAnomaly.severity(), Severity::Warn);
        assert_eq!(Event::SimulationEvent.severity(), Severity::Trace);
        assert_eq!(Event::CatalogSeeded.severity(), Severity::Info);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::SimulationComplete), "SIMULATION_COMPLETE");
    }
}
