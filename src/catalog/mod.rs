//! Catalog subsystem for biblidx
//!
//! A `Library` composes an insertion-ordered `BookCollection` with a
//! `BookIndex` over ISBN, author, year and genre.
//!
//! # Principles
//!
//! - Books are immutable; an update is remove-old plus add-new
//! - Duplicates and misses are `false`/`None`/empty, never errors
//! - Only positional access out of bounds is an error
//! - Nothing in this module logs or prints

mod book;
mod collection;
mod errors;
mod library;
mod seed;
mod shared;

pub use book::{Book, BookInfo};
pub use collection::BookCollection;
pub use errors::{CatalogError, CatalogResult};
pub use library::{CatalogStatistics, Library};
pub use seed::{starter_books, starter_library, STARTER_LIBRARY_NAME};
pub use shared::SharedLibrary;
