//! CLI command implementations
//!
//! Commands are thin drivers over `Library` and `LibrarySimulation`; all
//! user-visible text is produced here, never in the catalog.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::catalog::{starter_library, Book, BookCollection, Library, STARTER_LIBRARY_NAME};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::simulation::{LibrarySimulation, SimulationConfig};

use super::args::{Cli, Command, FindQuery};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_lines, write_response};

/// Load seed books from a JSON array file
pub fn load_books(path: &Path) -> CliResult<Vec<Book>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read books file {}: {}", path.display(), e))
    })?;

    let books: Vec<Book> = serde_json::from_str(&content).map_err(|e| {
        CliError::config_error(format!("Invalid books JSON in {}: {}", path.display(), e))
    })?;

    log_event_with_fields(
        Event::BooksLoaded,
        &[
            ("path", &path.display().to_string()),
            ("books", &books.len().to_string()),
        ],
    );
    Ok(books)
}

/// Build the library a command works on: the starter catalog, or the
/// books from `books_path` when given.
pub fn build_library(books_path: Option<&Path>) -> CliResult<Library> {
    let library = match books_path {
        Some(path) => Library::with_books(STARTER_LIBRARY_NAME, load_books(path)?),
        None => starter_library(),
    };

    log_event_with_fields(
        Event::CatalogSeeded,
        &[
            ("library", library.name()),
            ("books", &library.len().to_string()),
        ],
    );
    Ok(library)
}

/// Resolve the simulation config: file (or defaults), then flag overrides.
pub fn load_config(
    config_path: Option<&Path>,
    steps: Option<usize>,
    seed: Option<u64>,
) -> CliResult<SimulationConfig> {
    let mut config = match config_path {
        Some(path) => {
            let config = SimulationConfig::load(path)?;
            log_event_with_fields(
                Event::ConfigLoaded,
                &[("path", &path.display().to_string())],
            );
            config
        }
        None => SimulationConfig::default(),
    };

    if let Some(steps) = steps {
        config = config.with_steps(steps);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    config.validate()?;
    Ok(config)
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    if cli.verbose {
        Logger::set_min_severity(Severity::Trace);
    }

    let result = run_command(cli.command);
    match &result {
        Ok(()) => log_event_with_fields(Event::CommandComplete, &[]),
        Err(e) => log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        ),
    }
    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Demo => demo(),
        Command::Simulate {
            config,
            books,
            steps,
            seed,
            json,
        } => respond(json, || {
            simulate(config.as_deref(), books.as_deref(), steps, seed, json)
        }),
        Command::Find { query, books, json } => {
            respond(json, || find(&query, books.as_deref(), json))
        }
        Command::Stats { books, json } => respond(json, || stats(books.as_deref(), json)),
    }
}

/// JSON-mode commands also report failures as an error envelope on stdout.
fn respond(json: bool, command: impl FnOnce() -> CliResult<()>) -> CliResult<()> {
    let result = command();
    if json {
        if let Err(e) = &result {
            write_error(e.code_str(), e.message())?;
        }
    }
    result
}

fn render_lines(collection: &BookCollection, render: impl Fn(&Book) -> String) -> Vec<String> {
    collection.iter().map(|b| render(b.as_ref())).collect()
}

/// Walk through the collection, index and library API, then run one
/// seeded and one unseeded simulation.
pub fn demo() -> CliResult<()> {
    let mut library = starter_library();
    let mut out: Vec<String> = Vec::new();

    out.push(format!("Created library: {}", library));
    out.push(format!("Initial book count: {}", library.books().len()));

    out.push(String::new());
    out.push("CUSTOM COLLECTIONS".to_string());
    out.push(String::new());
    out.push("1. BookCollection (ordered collection):".to_string());
    out.push(format!("   Length: {}", library.books().len()));
    let head = library.books().slice(0, library.len().min(3))?;
    out.push(format!("   First 3 books (slice): {}", head));
    for book in &head {
        out.push(format!("     {}", book));
    }
    out.push("   Iteration (first 3 books):".to_string());
    for book in library.books().iter().take(3) {
        out.push(format!("     - {}", book.title()));
    }
    out.push(format!(
        "   'Tolstoy' in collection? {}",
        library.books().contains_text("Tolstoy")
    ));

    out.push(String::new());
    out.push("2. BookIndex (multi-key index):".to_string());
    out.push(format!("   Books in index: {}", library.index().len()));
    out.push("   Search by author 'Leo Tolstoy':".to_string());
    for book in library.index().search_by_author("Leo Tolstoy") {
        out.push(format!("     - {} ({})", book.title(), book.year()));
    }
    out.push("   Search by year 1869:".to_string());
    for book in library.index().search_by_year(1869) {
        out.push(format!("     - {} - {}", book.title(), book.author()));
    }
    out.push("   Search by ISBN:".to_string());
    if let Some(book) = library.index().search_by_isbn("978-5-699-12014-7") {
        out.push(format!("     - {}", book.title()));
    }

    out.push(String::new());
    out.push("LIBRARY FUNCTIONALITY".to_string());
    out.push(String::new());
    out.push("1. Books by author 'Leo Tolstoy':".to_string());
    out.extend(render_lines(&library.find_by_author("Leo Tolstoy"), |b| {
        format!("   - {} ({})", b.title(), b.year())
    }));
    out.push(String::new());
    out.push("2. Books in genre 'Fantasy':".to_string());
    out.extend(render_lines(&library.find_by_genre("Fantasy"), |b| {
        format!("   - {} - {}", b.title(), b.author())
    }));
    out.push(String::new());
    out.push("3. Books from 1869:".to_string());
    out.extend(render_lines(&library.find_by_year(1869), |b| {
        format!("   - {} - {}", b.title(), b.author())
    }));

    out.push(String::new());
    out.push("4. Adding a new book:".to_string());
    let new_book = Book::new("New Book", "New Author", 2023, "Science", "NEW-001");
    if library.add_book(new_book.clone()) {
        out.push(format!("   Added: {}", new_book.title()));
    }
    out.push(String::new());
    out.push("5. Removing a book:".to_string());
    if library.remove_book(&new_book) {
        out.push(format!("   Removed: {}", new_book.title()));
    }

    out.push(String::new());
    out.push("SIMULATION".to_string());
    write_lines(&out)?;

    {
        let seeded = SimulationConfig::default().with_steps(15).with_seed(Some(42));
        let mut simulation = LibrarySimulation::new(&mut library, seeded)?;
        simulation.run()?;
        write_lines(simulation.log())?;
    }

    let unseeded = SimulationConfig::default().with_steps(10);
    let mut simulation = LibrarySimulation::new(&mut library, unseeded)?;
    simulation.run()?;
    write_lines(simulation.log())
}

/// Run a configured simulation
pub fn simulate(
    config_path: Option<&Path>,
    books_path: Option<&Path>,
    steps: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> CliResult<()> {
    let config = load_config(config_path, steps, seed)?;
    let mut library = build_library(books_path)?;

    let mut simulation = LibrarySimulation::new(&mut library, config)?;
    let report = simulation.run()?;

    if json {
        write_response(json!({
            "report": report,
            "log": simulation.log(),
        }))
    } else {
        write_lines(simulation.log())
    }
}

/// Look books up by exactly one key
pub fn find(query: &FindQuery, books_path: Option<&Path>, json: bool) -> CliResult<()> {
    let library = build_library(books_path)?;

    let found: BookCollection = if let Some(author) = &query.author {
        library.find_by_author(author)
    } else if let Some(genre) = &query.genre {
        library.find_by_genre(genre)
    } else if let Some(year) = query.year {
        library.find_by_year(year)
    } else if let Some(isbn) = &query.isbn {
        library.find_by_isbn(isbn).into_iter().collect()
    } else if let Some(title) = &query.title {
        library.find_by_title(title)
    } else {
        BookCollection::new()
    };

    if json {
        let books: Vec<_> = found.iter().map(|b| b.info()).collect();
        write_response(json!({ "count": books.len(), "books": books }))
    } else {
        let mut lines = vec![format!("Found {} books", found.len())];
        lines.extend(render_lines(&found, |b| format!("  {}", b)));
        write_lines(&lines)
    }
}

/// Print catalog statistics
pub fn stats(books_path: Option<&Path>, json: bool) -> CliResult<()> {
    let library = build_library(books_path)?;
    let stats = library.statistics();

    if json {
        return write_response(serde_json::to_value(&stats)?);
    }

    let years: Vec<String> = stats.years.iter().map(|y| y.to_string()).collect();
    let genres: Vec<&str> = stats.genres.iter().map(String::as_str).collect();
    write_lines(&[
        format!("{}", library),
        format!("Total books: {}", stats.total_books),
        format!("Total authors: {}", stats.total_authors),
        format!("Years: {}", years.join(", ")),
        format!("Genres: {}", genres.join(", ")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_books() {
        let file = temp_file(
            r#"[
                {"title": "Dune", "author": "Frank Herbert", "year": 1965, "genre": "SF", "isbn": "D1"},
                {"title": "Dune Again", "author": "Frank Herbert", "year": 1966, "genre": "SF", "isbn": "D1"}
            ]"#,
        );
        let books = load_books(file.path()).unwrap();
        assert_eq!(books.len(), 2);

        // Duplicate ISBNs collapse when seeding
        let library = build_library(Some(file.path())).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.find_by_isbn("D1").unwrap().title(), "Dune");
    }

    #[test]
    fn test_load_books_missing_field() {
        let file = temp_file(r#"[{"title": "No ISBN", "author": "A", "year": 1, "genre": "G"}]"#);
        let err = load_books(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "BIBLIDX_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_build_library_defaults_to_starter() {
        assert_eq!(build_library(None).unwrap().len(), 8);
    }

    #[test]
    fn test_load_config_overrides() {
        let file = temp_file(r#"{"steps": 5, "seed": 1}"#);

        let config = load_config(Some(file.path()), None, None).unwrap();
        assert_eq!((config.steps, config.seed), (5, Some(1)));

        let config = load_config(Some(file.path()), Some(9), Some(2)).unwrap();
        assert_eq!((config.steps, config.seed), (9, Some(2)));

        let config = load_config(None, None, None).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_load_config_rejects_invalid_table() {
        let file = temp_file(r#"{"events": [{"event": "add_book", "weight": 0}]}"#);
        let err = load_config(Some(file.path()), None, None).unwrap_err();
        assert_eq!(err.code_str(), "BIBLIDX_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/biblidx.json")), None, None).unwrap_err();
        assert!(err.message().contains("BIBLIDX_SIM_CONFIG_READ"));
    }
}
