//! Book index
//!
//! Maintains four lookup structures over the same set of books:
//!
//! - ISBN -> book (one-to-one)
//! - author -> books, year -> books, genre -> books (one-to-many)
//!
//! # API
//!
//! - `add_record(book)` - Index a book under all four keys
//! - `remove_record(book)` - Remove a book from all four structures
//! - `remove_by_isbn(isbn)` - Resolve then remove
//! - `update_index(old, new)` - Replace one book with another
//! - `search_by_*` - Lookups returning copies

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::catalog::Book;

use super::btree::BucketTree;

/// Multi-key index over books
#[derive(Debug, Default)]
pub struct BookIndex {
    /// Primary key index (ISBN -> book)
    by_isbn: BTreeMap<String, Arc<Book>>,

    by_author: BucketTree<String>,
    by_year: BucketTree<i32>,
    by_genre: BucketTree<String>,
}

impl BookIndex {
    /// Creates a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a book under all four keys.
    ///
    /// Overwrites any earlier ISBN entry; callers check uniqueness first.
    pub fn add_record(&mut self, book: Arc<Book>) {
        self.by_isbn.insert(book.isbn().to_string(), Arc::clone(&book));
        self.by_author
            .insert(book.author().to_string(), Arc::clone(&book));
        self.by_year.insert(book.year(), Arc::clone(&book));
        self.by_genre.insert(book.genre().to_string(), book);
    }

    /// Remove a book from every structure.
    ///
    /// Returns false if its ISBN is not indexed. Buckets are chosen by the
    /// indexed record, not by `book`, whose other fields may be stale.
    pub fn remove_record(&mut self, book: &Book) -> bool {
        let Some(stored) = self.by_isbn.remove(book.isbn()) else {
            return false;
        };

        self.by_author.remove(stored.author(), &stored);
        self.by_year.remove(&stored.year(), &stored);
        self.by_genre.remove(stored.genre(), &stored);
        true
    }

    /// Remove the book indexed under `isbn`.
    pub fn remove_by_isbn(&mut self, isbn: &str) -> bool {
        match self.by_isbn.get(isbn).cloned() {
            Some(book) => self.remove_record(&book),
            None => false,
        }
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is only indexed if `old` was present and removed; otherwise the
    /// index is left untouched and false is returned.
    pub fn update_index(&mut self, old: &Book, new: Arc<Book>) -> bool {
        if !self.remove_record(old) {
            return false;
        }
        self.add_record(new);
        true
    }

    pub fn search_by_author(&self, author: &str) -> Vec<Arc<Book>> {
        self.by_author.lookup(author)
    }

    pub fn search_by_year(&self, year: i32) -> Vec<Arc<Book>> {
        self.by_year.lookup(&year)
    }

    pub fn search_by_genre(&self, genre: &str) -> Vec<Arc<Book>> {
        self.by_genre.lookup(genre)
    }

    pub fn search_by_isbn(&self, isbn: &str) -> Option<Arc<Book>> {
        self.by_isbn.get(isbn).cloned()
    }

    /// Number of unique ISBNs
    pub fn len(&self) -> usize {
        self.by_isbn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_isbn.is_empty()
    }

    /// Indexed ISBNs in sorted order
    pub fn isbns(&self) -> impl Iterator<Item = &str> {
        self.by_isbn.keys().map(String::as_str)
    }

    /// Distinct authors in sorted order
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.by_author.keys().map(String::as_str)
    }

    /// Distinct years in ascending order
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// Distinct genres in sorted order
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.by_genre.keys().map(String::as_str)
    }

    pub fn author_count(&self) -> usize {
        self.by_author.key_count()
    }

    /// Drop every entry from all four structures
    pub fn clear(&mut self) {
        self.by_isbn.clear();
        self.by_author.clear();
        self.by_year.clear();
        self.by_genre.clear();
    }
}

impl fmt::Display for BookIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BookIndex({} books, {} authors)",
            self.len(),
            self.author_count()
        )
    }
}
