//! Simulation runner
//!
//! Drives a library through a sequence of weighted random events and keeps
//! a human-readable log of what happened. The runner only uses the
//! library's public API and its read-only key enumerations.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Book, CatalogStatistics, Library};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot};

use super::config::{SimulationConfig, SimulationEvent};
use super::errors::{SimulationError, SimulationResult};
use super::random::{RandomSource, SeededRandom};

/// Detail lines shown under a search result
const AUTHOR_PREVIEW: usize = 3;
const GENRE_PREVIEW: usize = 3;
const YEAR_PREVIEW: usize = 2;

/// Name pools a generated book draws from
#[derive(Debug, Clone, Copy)]
enum Pool {
    Titles,
    Authors,
    Genres,
}

impl Pool {
    fn of(self, config: &SimulationConfig) -> &[String] {
        match self {
            Pool::Titles => &config.titles,
            Pool::Authors => &config.authors,
            Pool::Genres => &config.genres,
        }
    }
}

/// Summary of one `run`
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub steps: usize,
    pub seed: Option<u64>,
    /// How often each event kind was chosen
    pub event_counts: BTreeMap<String, u64>,
    pub metrics: MetricsSnapshot,
    pub statistics: CatalogStatistics,
    /// Length of the cumulative log after the run
    pub log_lines: usize,
}

/// Weighted random event simulation over a borrowed library
pub struct LibrarySimulation<'a, R: RandomSource = SeededRandom> {
    library: &'a mut Library,
    config: SimulationConfig,
    rng: R,
    log: Vec<String>,
    step: usize,
}

impl<'a> LibrarySimulation<'a, SeededRandom> {
    /// Build a simulation using `config.seed`, or OS entropy when unset.
    pub fn new(library: &'a mut Library, config: SimulationConfig) -> SimulationResult<Self> {
        let rng = match config.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::with_random_source(library, config, rng)
    }
}

impl<'a, R: RandomSource> LibrarySimulation<'a, R> {
    /// Build a simulation drawing from a caller-supplied source.
    pub fn with_random_source(
        library: &'a mut Library,
        config: SimulationConfig,
        rng: R,
    ) -> SimulationResult<Self> {
        config.validate()?;
        Ok(Self {
            library,
            config,
            rng,
            log: Vec::new(),
            step: 0,
        })
    }

    /// Cumulative event log, oldest first
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn library(&self) -> &Library {
        &*self.library
    }

    /// Run `config.steps` events.
    ///
    /// Log lines accumulate across calls; the report covers this run only.
    pub fn run(&mut self) -> SimulationResult<SimulationReport> {
        let steps = self.config.steps;
        let seed = self.config.seed;
        let metrics = MetricsRegistry::new();
        let mut event_counts: BTreeMap<String, u64> = BTreeMap::new();

        log_event_with_fields(
            Event::SimulationStart,
            &[
                ("library", self.library.name()),
                ("steps", &steps.to_string()),
                ("seed", &seed.map(|s| s.to_string()).unwrap_or_default()),
            ],
        );

        if let Some(seed) = seed {
            self.record(format!("Seed set: {}", seed));
        }
        self.record(format!("Simulation start ({} steps)", steps));

        let weights = self.config.weights();
        for step in 1..=steps {
            self.step = step;
            self.record(format!("Step {}:", step));

            let chosen = self
                .rng
                .choose_weighted(&weights)
                .ok_or(SimulationError::ZeroTotalWeight)?;
            let event = self
                .config
                .events
                .get(chosen)
                .map(|entry| entry.event)
                .ok_or(SimulationError::RandomOutOfRange {
                    index: chosen,
                    len: self.config.events.len(),
                })?;
            *event_counts.entry(event.as_str().to_string()).or_default() += 1;

            self.dispatch(event, &metrics)?;
        }
        self.step = 0;

        let total = self.log.len();
        self.record(format!("Total events: {}", total));
        self.record(format!("Books in library: {}", self.library.len()));

        log_event_with_fields(
            Event::SimulationComplete,
            &[
                ("library", self.library.name()),
                ("books", &self.library.len().to_string()),
                ("log_lines", &self.log.len().to_string()),
            ],
        );

        Ok(SimulationReport {
            steps,
            seed,
            event_counts,
            metrics: metrics.snapshot(),
            statistics: self.library.statistics(),
            log_lines: self.log.len(),
        })
    }

    fn dispatch(&mut self, event: SimulationEvent, metrics: &MetricsRegistry) -> SimulationResult<()> {
        match event {
            SimulationEvent::AddBook => self.add_book(metrics)?,
            SimulationEvent::RemoveRandomBook => self.remove_random_book(metrics)?,
            SimulationEvent::SearchByAuthor => self.search_by_author(metrics)?,
            SimulationEvent::SearchByGenre => self.search_by_genre(metrics)?,
            SimulationEvent::SearchByYear => self.search_by_year(metrics)?,
            SimulationEvent::UpdateRandomBook => self.update_random_book(metrics)?,
            SimulationEvent::SearchNonexistentBook => self.search_nonexistent_book(metrics),
        }
        Ok(())
    }

    fn record(&mut self, message: String) {
        log_event_with_fields(
            Event::SimulationEvent,
            &[("step", &self.step.to_string()), ("message", &message)],
        );
        self.log.push(message);
    }

    /// Draw a position in `0..len`, rejecting out-of-range draws.
    fn draw(&mut self, len: usize) -> SimulationResult<usize> {
        let index = self.rng.index(len);
        if index < len {
            Ok(index)
        } else {
            Err(SimulationError::RandomOutOfRange { index, len })
        }
    }

    fn pick(&mut self, pool: Pool) -> SimulationResult<String> {
        let index = self.draw(pool.of(&self.config).len())?;
        Ok(pool.of(&self.config)[index].clone())
    }

    fn random_book(&mut self) -> SimulationResult<Arc<Book>> {
        let position = self.draw(self.library.len())?;
        Ok(Arc::clone(self.library.books().get(position)?))
    }

    fn add_book(&mut self, metrics: &MetricsRegistry) -> SimulationResult<()> {
        let stem = self.pick(Pool::Titles)?;
        let title = format!("{} {}", stem, self.rng.range_inclusive(1, 100));
        let author = self.pick(Pool::Authors)?;
        let year = self
            .rng
            .range_inclusive(self.config.min_year.into(), self.config.max_year.into());
        let genre = self.pick(Pool::Genres)?;
        let isbn = format!(
            "978-{}-{}-{}",
            self.rng.range_inclusive(100, 999),
            self.rng.range_inclusive(10, 99),
            self.rng.range_inclusive(1000, 9999)
        );

        // Drawn between two i32 bounds, so the cast is lossless.
        let book = Book::new(title, author, year as i32, genre, isbn.as_str());
        let title = book.title().to_string();

        if self.library.add_book(book) {
            metrics.increment_books_added();
            self.record(format!("Added new book: {} (ISBN: {})", title, isbn));
        } else {
            metrics.increment_duplicates_rejected();
            self.record(format!("Book with ISBN {} already exists", isbn));
        }
        Ok(())
    }

    fn remove_random_book(&mut self, metrics: &MetricsRegistry) -> SimulationResult<()> {
        if self.library.is_empty() {
            metrics.increment_events_skipped();
            self.record("No books to remove".to_string());
            return Ok(());
        }

        let book = self.random_book()?;
        if self.library.remove_book(&book) {
            metrics.increment_books_removed();
            self.record(format!("Removed book: {} (ISBN: {})", book.title(), book.isbn()));
        } else {
            self.record(format!("Failed to remove book {}", book.title()));
        }
        Ok(())
    }

    fn search_by_author(&mut self, metrics: &MetricsRegistry) -> SimulationResult<()> {
        let authors: Vec<String> = self.library.index().authors().map(str::to_string).collect();
        if authors.is_empty() {
            metrics.increment_events_skipped();
            self.record("No authors in library".to_string());
            return Ok(());
        }

        let author = &authors[self.draw(authors.len())?];
        let books = self.library.find_by_author(author);
        metrics.record_search(!books.is_empty());

        self.record(format!("Search by author '{}': found {} books", author, books.len()));
        for (i, book) in books.first_n(AUTHOR_PREVIEW).iter().enumerate() {
            self.record(format!("    {}. {} ({})", i + 1, book.title(), book.year()));
        }
        Ok(())
    }

    fn search_by_genre(&mut self, metrics: &MetricsRegistry) -> SimulationResult<()> {
        let genres: Vec<String> = self.library.index().genres().map(str::to_string).collect();
        if genres.is_empty() {
            metrics.increment_events_skipped();
            self.record("No genres in library".to_string());
            return Ok(());
        }

        let genre = &genres[self.draw(genres.len())?];
        let books = self.library.find_by_genre(genre);
        metrics.record_search(!books.is_empty());

        self.record(format!("Search by genre '{}': found {} books", genre, books.len()));
        for (i, book) in books.first_n(GENRE_PREVIEW).iter().enumerate() {
            self.record(format!("    {}. {} - {}", i + 1, book.title(), book.author()));
        }
        Ok(())
    }

    fn search_by_year(&mut self, metrics: &MetricsRegistry) -> SimulationResult<()> {
        let years: Vec<i32> = self.library.index().years().collect();
        if years.is_empty() {
            metrics.increment_events_skipped();
            self.record("No years in library".to_string());
            return Ok(());
        }

        let year = years[self.draw(years.len())?];
        let books = self.library.find_by_year(year);
        metrics.record_search(!books.is_empty());

        self.record(format!("Search by year {}: found {} books", year, books.len()));
        for (i, book) in books.first_n(YEAR_PREVIEW).iter().enumerate() {
            self.record(format!("    {}. {} - {}", i + 1, book.title(), book.author()));
        }
        Ok(())
    }

    fn update_random_book(&mut self, metrics: &MetricsRegistry) -> SimulationResult<()> {
        if self.library.is_empty() {
            metrics.increment_events_skipped();
            self.record("No books to update".to_string());
            return Ok(());
        }

        let old = self.random_book()?;
        let new = Book::new(
            format!("{} (updated edition)", old.title()),
            old.author(),
            old.year() + 1,
            old.genre(),
            format!("NEW-{}", old.isbn()),
        );
        let new_title = new.title().to_string();

        if self.library.update_book(old.isbn(), new) {
            metrics.increment_books_updated();
            self.record(format!("Updated book: {} -> {}", old.title(), new_title));
        } else {
            metrics.increment_updates_rejected();
            self.record(format!("Failed to update book {}", old.title()));
        }
        Ok(())
    }

    fn search_nonexistent_book(&mut self, metrics: &MetricsRegistry) {
        let isbn = format!("FAKE-{}", self.rng.range_inclusive(1000, 9999));

        match self.library.find_by_isbn(&isbn) {
            None => {
                metrics.record_search(false);
                self.record(format!(
                    "Search for nonexistent book (ISBN: {}): not found",
                    isbn
                ));
            }
            Some(book) => {
                metrics.record_search(true);
                log_event_with_fields(
                    Event::SimulationAnomaly,
                    &[("isbn", &isbn), ("title", book.title())],
                );
                self.record(format!("Found a book that should not exist: {}", book.title()));
            }
        }
    }
}
