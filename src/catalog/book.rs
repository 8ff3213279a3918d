//! Book records
//!
//! A `Book` is immutable once constructed. Identity is the ISBN: two books
//! with the same ISBN are the same catalog entry regardless of the other
//! fields. Changing any field means building a new `Book`.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    genre: String,
    isbn: String,
}

/// Flat, serializable view of a book's fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub isbn: String,
}

impl Book {
    /// Creates a new book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            isbn: isbn.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Case-insensitive substring test over every field.
    ///
    /// Fields are joined as `title author genre year isbn`, so a needle may
    /// span the boundary between two adjacent fields.
    pub fn contains_text(&self, needle: &str) -> bool {
        let haystack = format!(
            "{} {} {} {} {}",
            self.title, self.author, self.genre, self.year, self.isbn
        );
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Returns all fields as a detached value
    pub fn info(&self) -> BookInfo {
        BookInfo {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            genre: self.genre.clone(),
            isbn: self.isbn.clone(),
        }
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book('{}', '{}', {}, '{}', '{}')",
            self.title, self.author, self.year, self.genre, self.isbn
        )
    }
}
