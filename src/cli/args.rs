//! CLI argument definitions using clap
//!
//! Commands:
//! - biblidx demo
//! - biblidx simulate [--config <path>] [--books <path>] [--steps N] [--seed S] [--json]
//! - biblidx find (--author A | --genre G | --year Y | --isbn I | --title T) [--books <path>] [--json]
//! - biblidx stats [--books <path>] [--json]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// biblidx - An indexed in-memory library catalog
#[derive(Parser, Debug)]
#[command(name = "biblidx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Write TRACE-level structured logs to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the catalog API on the starter library, then simulate
    Demo,

    /// Run a weighted random simulation against a library
    Simulate {
        /// Path to a JSON simulation config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to a JSON array of seed books (defaults to the starter library)
        #[arg(long)]
        books: Option<PathBuf>,

        /// Number of steps (overrides the config file)
        #[arg(long)]
        steps: Option<usize>,

        /// RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON report instead of the event log
        #[arg(long)]
        json: bool,
    },

    /// Look up books by one key
    Find {
        #[command(flatten)]
        query: FindQuery,

        /// Path to a JSON array of seed books (defaults to the starter library)
        #[arg(long)]
        books: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print catalog statistics
    Stats {
        /// Path to a JSON array of seed books (defaults to the starter library)
        #[arg(long)]
        books: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Exactly one lookup key
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct FindQuery {
    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub isbn: Option<String>,

    /// Case-insensitive title fragment
    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from(["biblidx", "simulate", "--steps", "15", "--seed", "42"]).unwrap();
        match cli.command {
            Command::Simulate { steps, seed, json, config, .. } => {
                assert_eq!(steps, Some(15));
                assert_eq!(seed, Some(42));
                assert!(!json);
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_find_requires_exactly_one_key() {
        assert!(Cli::try_parse_from(["biblidx", "find"]).is_err());
        assert!(Cli::try_parse_from(["biblidx", "find", "--author", "A", "--genre", "G"]).is_err());

        let cli = Cli::try_parse_from(["biblidx", "find", "--year", "1869"]).unwrap();
        match cli.command {
            Command::Find { query, .. } => assert_eq!(query.year, Some(1869)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["biblidx", "stats", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
