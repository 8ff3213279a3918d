//! Simulation Determinism Tests
//!
//! Tests for simulation invariants:
//! - Same seed, same starting library and same step count produce the same
//!   log and the same final library
//! - The library stays consistent after every run
//! - The event table controls which events can happen

use biblidx::catalog::{starter_library, Library};
use biblidx::simulation::{
    LibrarySimulation, SimulationConfig, SimulationEvent, SimulationReport, WeightedEvent,
};
use std::collections::BTreeSet;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_seeded(seed: u64, steps: usize) -> (Vec<String>, Vec<String>, SimulationReport) {
    let mut library = starter_library();
    let config = SimulationConfig::default()
        .with_steps(steps)
        .with_seed(Some(seed));

    let mut simulation = LibrarySimulation::new(&mut library, config).unwrap();
    let report = simulation.run().unwrap();
    let log = simulation.log().to_vec();

    (log, final_contents(&library), report)
}

fn final_contents(library: &Library) -> Vec<String> {
    library.books().iter().map(|b| b.to_string()).collect()
}

fn only(event: SimulationEvent) -> SimulationConfig {
    SimulationConfig::default().with_events(vec![WeightedEvent::new(event, 1.0)])
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Two runs with the same seed match line for line.
#[test]
fn test_same_seed_same_log() {
    let (log_a, books_a, report_a) = run_seeded(42, 15);
    let (log_b, books_b, report_b) = run_seeded(42, 15);

    assert_eq!(log_a, log_b);
    assert_eq!(books_a, books_b);
    assert_eq!(report_a.event_counts, report_b.event_counts);
    assert_eq!(report_a.metrics, report_b.metrics);
    assert_eq!(report_a.statistics, report_b.statistics);
}

/// Determinism holds across many seeds and longer runs.
#[test]
fn test_determinism_across_seeds() {
    for seed in [0, 1, 7, 1234, u64::MAX] {
        let (log_a, books_a, _) = run_seeded(seed, 100);
        let (log_b, books_b, _) = run_seeded(seed, 100);
        assert_eq!(log_a, log_b, "seed {}", seed);
        assert_eq!(books_a, books_b, "seed {}", seed);
    }
}

/// The log is framed by the seed, start, step and summary lines.
#[test]
fn test_log_framing() {
    let (log, books, report) = run_seeded(42, 15);

    assert_eq!(log[0], "Seed set: 42");
    assert_eq!(log[1], "Simulation start (15 steps)");
    assert_eq!(log.iter().filter(|l| l.starts_with("Step ")).count(), 15);

    let total = &log[log.len() - 2];
    assert_eq!(total, &format!("Total events: {}", log.len() - 2));
    assert_eq!(log[log.len() - 1], format!("Books in library: {}", books.len()));

    assert_eq!(report.steps, 15);
    assert_eq!(report.seed, Some(42));
    assert_eq!(report.event_counts.values().sum::<u64>(), 15);
    assert_eq!(report.log_lines, log.len());
}

// =============================================================================
// Consistency Tests
// =============================================================================

/// Index and collection agree after a long run.
#[test]
fn test_library_consistent_after_run() {
    let mut library = starter_library();
    let config = SimulationConfig::default().with_steps(500).with_seed(Some(9));
    LibrarySimulation::new(&mut library, config)
        .unwrap()
        .run()
        .unwrap();

    let in_collection: BTreeSet<String> =
        library.books().iter().map(|b| b.isbn().to_string()).collect();
    let in_index: BTreeSet<String> = library.index().isbns().map(str::to_string).collect();
    assert_eq!(in_collection, in_index);
    assert_eq!(in_collection.len(), library.len());

    let bucketed: usize = library
        .index()
        .authors()
        .map(|a| library.index().search_by_author(a).len())
        .sum();
    assert_eq!(bucketed, library.len());
}

// =============================================================================
// Event Table Tests
// =============================================================================

/// A table with only removals drains the library and then reports it empty.
#[test]
fn test_remove_only_drains_library() {
    let mut library = starter_library();
    let config = only(SimulationEvent::RemoveRandomBook)
        .with_steps(10)
        .with_seed(Some(3));

    let mut simulation = LibrarySimulation::new(&mut library, config).unwrap();
    simulation.run().unwrap();

    let removed = simulation
        .log()
        .iter()
        .filter(|l| l.starts_with("Removed book: "))
        .count();
    let empty = simulation
        .log()
        .iter()
        .filter(|l| l.as_str() == "No books to remove")
        .count();
    assert_eq!((removed, empty), (8, 2));
    assert!(library.is_empty());
}

/// Searches never mutate the library.
#[test]
fn test_searches_are_read_only() {
    let mut library = starter_library();
    let before: Vec<String> = final_contents(&library);
    let config = SimulationConfig::default()
        .with_events(vec![
            WeightedEvent::new(SimulationEvent::SearchByAuthor, 1.0),
            WeightedEvent::new(SimulationEvent::SearchByGenre, 1.0),
            WeightedEvent::new(SimulationEvent::SearchByYear, 1.0),
            WeightedEvent::new(SimulationEvent::SearchNonexistentBook, 1.0),
        ])
        .with_steps(50)
        .with_seed(Some(11));

    let report = LibrarySimulation::new(&mut library, config)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(final_contents(&library), before);
    assert_eq!(report.metrics.books_added, 0);
    assert_eq!(report.metrics.books_removed, 0);
    assert_eq!(report.metrics.searches_hit + report.metrics.searches_missed, 50);
}

/// Zero-weight events are never chosen.
#[test]
fn test_zero_weight_never_chosen() {
    let mut library = starter_library();
    let config = SimulationConfig::default()
        .with_events(vec![
            WeightedEvent::new(SimulationEvent::AddBook, 1.0),
            WeightedEvent::new(SimulationEvent::RemoveRandomBook, 0.0),
        ])
        .with_steps(30)
        .with_seed(Some(5));

    let report = LibrarySimulation::new(&mut library, config)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(report.event_counts.get("add_book"), Some(&30));
    assert!(!report.event_counts.contains_key("remove_random_book"));
    assert!(library.len() >= 8);
}

/// Searching an empty library logs the empty-key messages.
#[test]
fn test_searches_on_empty_library() {
    let mut library = Library::new("Empty");
    let config = only(SimulationEvent::SearchByAuthor)
        .with_steps(2)
        .with_seed(Some(1));

    let mut simulation = LibrarySimulation::new(&mut library, config).unwrap();
    simulation.run().unwrap();
    assert_eq!(
        simulation
            .log()
            .iter()
            .filter(|l| l.as_str() == "No authors in library")
            .count(),
        2
    );
}
