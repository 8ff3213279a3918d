//! Secondary index subsystem for biblidx
//!
//! Indexes are derived, in-memory state mirroring the library's primary
//! collection.
//!
//! # Design Principles
//!
//! - Derived state: the collection is the source of truth
//! - Deterministic: BTreeMap key order, insertion-ordered buckets
//! - Lookups hand out copies, never references into live buckets
//!
//! # Invariants
//!
//! - A book is in the ISBN map iff it is in its author, year and genre buckets
//! - Empty buckets do not exist

mod btree;
mod manager;

pub use btree::BucketTree;
pub use manager::BookIndex;
