//! Library: the primary collection plus its secondary index
//!
//! # Invariants
//!
//! - The collection and the index always hold the same set of ISBNs
//! - Add writes the collection first, then the index
//! - Remove only touches the index once the collection removal succeeded
//! - Update checks every precondition before mutating anything

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::index::BookIndex;

use super::book::Book;
use super::collection::BookCollection;

/// Derived counts and key sets, computed on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStatistics {
    pub total_books: usize,
    pub total_authors: usize,
    pub years: BTreeSet<i32>,
    pub genres: BTreeSet<String>,
}

/// A named catalog of books
#[derive(Debug)]
pub struct Library {
    name: String,
    collection: BookCollection,
    index: BookIndex,
}

impl Library {
    /// Creates an empty library
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collection: BookCollection::new(),
            index: BookIndex::new(),
        }
    }

    /// Creates a library seeded with `books`. Duplicate ISBNs are skipped.
    pub fn with_books(name: impl Into<String>, books: impl IntoIterator<Item = Book>) -> Self {
        let mut library = Self::new(name);
        for book in books {
            library.add_book(book);
        }
        library
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a book. Returns false if its ISBN is already catalogued.
    pub fn add_book(&mut self, book: impl Into<Arc<Book>>) -> bool {
        let book = book.into();
        if !self.collection.add(Arc::clone(&book)) {
            return false;
        }
        self.index.add_record(book);
        true
    }

    /// Removes the catalogued book equal to `book`.
    pub fn remove_book(&mut self, book: &Book) -> bool {
        if !self.collection.remove(book) {
            return false;
        }
        self.index.remove_record(book);
        true
    }

    pub fn remove_book_by_isbn(&mut self, isbn: &str) -> bool {
        match self.index.search_by_isbn(isbn) {
            Some(book) => self.remove_book(&book),
            None => false,
        }
    }

    /// Replaces the book at `old_isbn` with `new_book`.
    ///
    /// Returns false without changing anything if `old_isbn` is unknown or
    /// if `new_book`'s ISBN belongs to a different catalogued book.
    pub fn update_book(&mut self, old_isbn: &str, new_book: impl Into<Arc<Book>>) -> bool {
        let new_book = new_book.into();
        let Some(old_book) = self.index.search_by_isbn(old_isbn) else {
            return false;
        };
        if new_book.isbn() != old_isbn && self.index.search_by_isbn(new_book.isbn()).is_some() {
            return false;
        }

        self.remove_book(&old_book) && self.add_book(new_book)
    }

    pub fn find_by_author(&self, author: &str) -> BookCollection {
        self.index.search_by_author(author).into_iter().collect()
    }

    pub fn find_by_genre(&self, genre: &str) -> BookCollection {
        self.index.search_by_genre(genre).into_iter().collect()
    }

    pub fn find_by_year(&self, year: i32) -> BookCollection {
        self.index.search_by_year(year).into_iter().collect()
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<Arc<Book>> {
        self.index.search_by_isbn(isbn)
    }

    /// Case-insensitive title substring search, in collection order
    pub fn find_by_title(&self, part: &str) -> BookCollection {
        let needle = part.to_lowercase();
        self.collection
            .iter()
            .filter(|b| b.title().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics {
            total_books: self.collection.len(),
            total_authors: self.index.author_count(),
            years: self.index.years().collect(),
            genres: self.index.genres().map(str::to_string).collect(),
        }
    }

    /// All books, read-only
    pub fn books(&self) -> &BookCollection {
        &self.collection
    }

    /// The secondary index, read-only
    pub fn index(&self) -> &BookIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Removes every book from both structures
    pub fn clear(&mut self) {
        self.collection.clear();
        self.index.clear();
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Library('{}', {} books)", self.name, self.collection.len())
    }
}
