//! Library activity simulation
//!
//! Repeatedly picks a weighted random event (add, remove, search, update,
//! miss) and applies it to a library, logging one or more human-readable
//! lines per event.
//!
//! # Determinism
//!
//! With a fixed seed, the same starting library and the same step count,
//! the event log and the final library contents are identical across runs.
//! Key enumerations come from `BTreeMap`s, so random key picks do not
//! depend on hash order.

mod config;
mod errors;
mod random;
mod runner;

pub use config::{SimulationConfig, SimulationEvent, WeightedEvent};
pub use errors::{SimulationError, SimulationResult};
pub use random::{RandomSource, SeededRandom};
pub use runner::{LibrarySimulation, SimulationReport};
