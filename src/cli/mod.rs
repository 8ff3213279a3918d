//! CLI module for biblidx
//!
//! Provides command-line interface for:
//! - demo: Walk through the catalog on the starter library
//! - simulate: Weighted random simulation with optional seed
//! - find: One-shot lookup
//! - stats: Catalog statistics

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, FindQuery};
pub use commands::{build_library, demo, find, load_books, load_config, run, run_command, simulate, stats};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_lines, write_response};
