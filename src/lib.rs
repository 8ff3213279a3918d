//! biblidx - An indexed, deterministic in-memory library catalog
//!
//! Books live in an insertion-ordered collection and are mirrored in a
//! multi-key index (ISBN, author, year, genre). The `Library` facade keeps
//! both in agreement; the simulation module drives it with weighted random
//! events.

pub mod catalog;
pub mod cli;
pub mod index;
pub mod observability;
pub mod simulation;
