//! Insertion-ordered book collection
//!
//! The primary store of a library. Duplicates are rejected by ISBN
//! equality, not through an auxiliary index; keeping the secondary index in
//! step is the library's job.

use std::fmt;
use std::sync::Arc;

use super::book::Book;
use super::errors::{CatalogError, CatalogResult};

/// Ordered, duplicate-free sequence of books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCollection {
    books: Vec<Arc<Book>>,
}

impl BookCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Appends a book unless one with the same ISBN is already present.
    ///
    /// Returns false for a duplicate.
    pub fn add(&mut self, book: Arc<Book>) -> bool {
        if self.contains(&book) {
            return false;
        }
        self.books.push(book);
        true
    }

    /// Removes the first book equal to `book`.
    pub fn remove(&mut self, book: &Book) -> bool {
        match self.books.iter().position(|b| b.as_ref() == book) {
            Some(pos) => {
                self.books.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the book at `index`.
    pub fn remove_at(&mut self, index: usize) -> CatalogResult<Arc<Book>> {
        if index >= self.books.len() {
            return Err(CatalogError::OutOfRange {
                index,
                len: self.books.len(),
            });
        }
        Ok(self.books.remove(index))
    }

    /// Returns the book at `index`.
    pub fn get(&self, index: usize) -> CatalogResult<&Arc<Book>> {
        self.books.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.books.len(),
        })
    }

    /// Returns a new collection holding `[start, end)`.
    ///
    /// Bounds are strict: `start <= end <= len`.
    pub fn slice(&self, start: usize, end: usize) -> CatalogResult<BookCollection> {
        if start > end || end > self.books.len() {
            return Err(CatalogError::SliceOutOfRange {
                start,
                end,
                len: self.books.len(),
            });
        }
        Ok(Self {
            books: self.books[start..end].to_vec(),
        })
    }

    /// Returns at most the first `n` books, never failing.
    pub fn first_n(&self, n: usize) -> BookCollection {
        self.books.iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates in insertion order. Each call starts from the beginning.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Book>> {
        self.books.iter()
    }

    /// Membership by ISBN equality
    pub fn contains(&self, book: &Book) -> bool {
        self.books.iter().any(|b| b.as_ref() == book)
    }

    /// True if any book matches `needle` under `Book::contains_text`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.books.iter().any(|b| b.contains_text(needle))
    }

    /// Copy of the current contents
    pub fn books(&self) -> Vec<Arc<Book>> {
        self.books.clone()
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }
}

impl FromIterator<Arc<Book>> for BookCollection {
    fn from_iter<I: IntoIterator<Item = Arc<Book>>>(iter: I) -> Self {
        let mut collection = BookCollection::new();
        for book in iter {
            collection.add(book);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a BookCollection {
    type Item = &'a Arc<Book>;
    type IntoIter = std::slice::Iter<'a, Arc<Book>>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl fmt::Display for BookCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookCollection({} books)", self.books.len())
    }
}
