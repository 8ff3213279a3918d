//! Thread-safe library handle
//!
//! `Library` itself is single-threaded. Hosts that share one catalog across
//! threads go through `SharedLibrary`, which serializes every mutation
//! behind one write lock so no reader can see the collection and the index
//! disagree.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::book::Book;
use super::collection::BookCollection;
use super::library::{CatalogStatistics, Library};

/// Cloneable handle to a library behind a single `RwLock`
#[derive(Debug, Clone)]
pub struct SharedLibrary {
    inner: Arc<RwLock<Library>>,
}

impl SharedLibrary {
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(RwLock::new(library)),
        }
    }

    // Library operations never panic mid-mutation, so a poisoned lock
    // still guards a consistent library.
    fn read_guard(&self) -> RwLockReadGuard<'_, Library> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Library> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` with shared access
    pub fn read<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access. Multi-step changes inside `f` are
    /// observed by other threads as one step.
    pub fn write<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R {
        f(&mut self.write_guard())
    }

    pub fn add_book(&self, book: impl Into<Arc<Book>>) -> bool {
        self.write_guard().add_book(book)
    }

    pub fn remove_book(&self, book: &Book) -> bool {
        self.write_guard().remove_book(book)
    }

    pub fn remove_book_by_isbn(&self, isbn: &str) -> bool {
        self.write_guard().remove_book_by_isbn(isbn)
    }

    pub fn update_book(&self, old_isbn: &str, new_book: impl Into<Arc<Book>>) -> bool {
        self.write_guard().update_book(old_isbn, new_book)
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<Arc<Book>> {
        self.read_guard().find_by_isbn(isbn)
    }

    pub fn find_by_author(&self, author: &str) -> BookCollection {
        self.read_guard().find_by_author(author)
    }

    pub fn find_by_genre(&self, genre: &str) -> BookCollection {
        self.read_guard().find_by_genre(genre)
    }

    pub fn find_by_year(&self, year: i32) -> BookCollection {
        self.read_guard().find_by_year(year)
    }

    pub fn find_by_title(&self, part: &str) -> BookCollection {
        self.read_guard().find_by_title(part)
    }

    pub fn statistics(&self) -> CatalogStatistics {
        self.read_guard().statistics()
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    pub fn clear(&self) {
        self.write_guard().clear();
    }
}

impl From<Library> for SharedLibrary {
    fn from(library: Library) -> Self {
        Self::new(library)
    }
}
