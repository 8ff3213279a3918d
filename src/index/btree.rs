//! BTreeMap-based bucket structures
//!
//! A bucket tree maps one attribute value to the books carrying it:
//! `BTreeMap<K, Vec<Arc<Book>>>`. Keys iterate in sorted order; each bucket
//! keeps insertion order. A bucket that becomes empty is removed.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::catalog::Book;

/// One-to-many index over a single attribute.
#[derive(Debug)]
pub struct BucketTree<K: Ord> {
    tree: BTreeMap<K, Vec<Arc<Book>>>,
}

impl<K: Ord> Default for BucketTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> BucketTree<K> {
    /// Creates a new empty bucket tree
    pub fn new() -> Self {
        Self {
            tree: BTreeMap::new(),
        }
    }

    /// Append a book to the bucket for `key`.
    pub fn insert(&mut self, key: K, book: Arc<Book>) {
        self.tree.entry(key).or_default().push(book);
    }

    /// Remove the first book equal to `book` from the bucket for `key`.
    ///
    /// If the bucket has no more books, removes the key entirely.
    /// Returns whether a book was removed.
    pub fn remove<Q>(&mut self, key: &Q, book: &Book) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(bucket) = self.tree.get_mut(key) else {
            return false;
        };

        let removed = match bucket.iter().position(|b| b.as_ref() == book) {
            Some(pos) => {
                bucket.remove(pos);
                true
            }
            None => false,
        };

        if bucket.is_empty() {
            self.tree.remove(key);
        }
        removed
    }

    /// Copy of the bucket for `key`, empty if absent.
    pub fn lookup<Q>(&self, key: &Q) -> Vec<Arc<Book>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.get(key).cloned().unwrap_or_default()
    }

    /// Distinct keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.tree.keys()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of distinct keys
    pub fn key_count(&self) -> usize {
        self.tree.len()
    }

    /// Returns the total number of books across all buckets
    pub fn entry_count(&self) -> usize {
        self.tree.values().map(|v| v.len()).sum()
    }
}
