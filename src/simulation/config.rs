//! Simulation configuration
//!
//! The event table is an ordered list of `(event, weight)` pairs. Weights
//! are relative; they need not sum to one. Every field has a default, so a
//! config file only needs the fields it changes:
//!
//! ```json
//! {
//!   "steps": 50,
//!   "seed": 7,
//!   "events": [
//!     { "event": "add_book", "weight": 3.0 },
//!     { "event": "search_by_author", "weight": 1.0 }
//!   ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{SimulationError, SimulationResult};

/// Kinds of simulated library activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationEvent {
    AddBook,
    RemoveRandomBook,
    SearchByAuthor,
    SearchByGenre,
    SearchByYear,
    UpdateRandomBook,
    SearchNonexistentBook,
}

impl SimulationEvent {
    /// Every event kind, in default table order
    pub const ALL: [SimulationEvent; 7] = [
        SimulationEvent::AddBook,
        SimulationEvent::RemoveRandomBook,
        SimulationEvent::SearchByAuthor,
        SimulationEvent::SearchByGenre,
        SimulationEvent::SearchByYear,
        SimulationEvent::UpdateRandomBook,
        SimulationEvent::SearchNonexistentBook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationEvent::AddBook => "add_book",
            SimulationEvent::RemoveRandomBook => "remove_random_book",
            SimulationEvent::SearchByAuthor => "search_by_author",
            SimulationEvent::SearchByGenre => "search_by_genre",
            SimulationEvent::SearchByYear => "search_by_year",
            SimulationEvent::UpdateRandomBook => "update_random_book",
            SimulationEvent::SearchNonexistentBook => "search_nonexistent_book",
        }
    }

    fn default_weight(&self) -> f64 {
        match self {
            SimulationEvent::AddBook => 0.2,
            SimulationEvent::RemoveRandomBook
            | SimulationEvent::SearchByAuthor
            | SimulationEvent::SearchByGenre => 0.15,
            SimulationEvent::SearchByYear | SimulationEvent::UpdateRandomBook => 0.1,
            SimulationEvent::SearchNonexistentBook => 0.05,
        }
    }
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the event table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEvent {
    pub event: SimulationEvent,
    pub weight: f64,
}

impl WeightedEvent {
    pub fn new(event: SimulationEvent, weight: f64) -> Self {
        Self { event, weight }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of events per run
    pub steps: usize,

    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,

    /// Ordered event table
    pub events: Vec<WeightedEvent>,

    /// Title stems for generated books
    pub titles: Vec<String>,

    /// Authors for generated books
    pub authors: Vec<String>,

    /// Genres for generated books
    pub genres: Vec<String>,

    /// Earliest generated publication year
    pub min_year: i32,

    /// Latest generated publication year
    pub max_year: i32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            seed: None,
            events: SimulationEvent::ALL
                .iter()
                .map(|e| WeightedEvent::new(*e, e.default_weight()))
                .collect(),
            titles: strings(&[
                "War and Peace",
                "Crime and Punishment",
                "1984",
                "The Master and Margarita",
                "Harry Potter",
                "The Lord of the Rings",
            ]),
            authors: strings(&[
                "Leo Tolstoy",
                "Fyodor Dostoevsky",
                "George Orwell",
                "Mikhail Bulgakov",
                "J. K. Rowling",
                "J. R. R. Tolkien",
            ]),
            genres: strings(&["Novel", "Science Fiction", "Detective", "Fantasy", "Non-fiction"]),
            min_year: 1900,
            max_year: 2023,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a JSON file and validate it
    pub fn load(path: &Path) -> SimulationResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SimulationError::ConfigRead(format!("{}: {}", path.display(), e))
        })?;

        let config: SimulationConfig = serde_json::from_str(&content).map_err(|e| {
            SimulationError::ConfigRead(format!("invalid config JSON in {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the event table, pools and year range
    pub fn validate(&self) -> SimulationResult<()> {
        if self.events.is_empty() {
            return Err(SimulationError::EmptyEventTable);
        }

        for entry in &self.events {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(SimulationError::InvalidWeight {
                    event: entry.event.to_string(),
                    weight: entry.weight,
                });
            }
        }

        if self.events.iter().map(|e| e.weight).sum::<f64>() <= 0.0 {
            return Err(SimulationError::ZeroTotalWeight);
        }

        if self.titles.is_empty() {
            return Err(SimulationError::EmptyPool("titles"));
        }
        if self.authors.is_empty() {
            return Err(SimulationError::EmptyPool("authors"));
        }
        if self.genres.is_empty() {
            return Err(SimulationError::EmptyPool("genres"));
        }

        if self.min_year > self.max_year {
            return Err(SimulationError::InvalidYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }

        Ok(())
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_events(mut self, events: Vec<WeightedEvent>) -> Self {
        self.events = events;
        self
    }

    /// Weights in table order
    pub fn weights(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.weight).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_reference_weights() {
        let config = SimulationConfig::default();
        assert_eq!(config.events.len(), 7);
        assert_eq!(config.events[0], WeightedEvent::new(SimulationEvent::AddBook, 0.2));
        assert_eq!(
            config.events[6],
            WeightedEvent::new(SimulationEvent::SearchNonexistentBook, 0.05)
        );
        assert!((config.weights().iter().sum::<f64>() - 0.9).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"steps": 5, "seed": 9}"#).unwrap();
        assert_eq!(config.steps, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.events.len(), 7);
        assert_eq!(config.min_year, 1900);
    }

    #[test]
    fn test_event_names_snake_case() {
        let config: SimulationConfig = serde_json::from_str(
            r#"{"events": [{"event": "search_nonexistent_book", "weight": 1}]}"#,
        )
        .unwrap();
        assert_eq!(config.events[0].event, SimulationEvent::SearchNonexistentBook);

        for event in SimulationEvent::ALL {
            let json = serde_json::to_value(event).unwrap();
            assert_eq!(json, event.as_str());
        }
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let empty = SimulationConfig::default().with_events(vec![]);
        assert_eq!(empty.validate(), Err(SimulationError::EmptyEventTable));

        let negative = SimulationConfig::default()
            .with_events(vec![WeightedEvent::new(SimulationEvent::AddBook, -1.0)]);
        assert!(matches!(
            negative.validate(),
            Err(SimulationError::InvalidWeight { .. })
        ));

        let nan = SimulationConfig::default()
            .with_events(vec![WeightedEvent::new(SimulationEvent::AddBook, f64::NAN)]);
        assert!(matches!(nan.validate(), Err(SimulationError::InvalidWeight { .. })));

        let zero = SimulationConfig::default()
            .with_events(vec![WeightedEvent::new(SimulationEvent::AddBook, 0.0)]);
        assert_eq!(zero.validate(), Err(SimulationError::ZeroTotalWeight));
    }

    #[test]
    fn test_validate_rejects_empty_pools_and_years() {
        let mut config = SimulationConfig::default();
        config.genres.clear();
        assert_eq!(config.validate(), Err(SimulationError::EmptyPool("genres")));

        let mut config = SimulationConfig::default();
        config.min_year = 2024;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidYearRange { min: 2024, max: 2023 })
        ));
    }
}
