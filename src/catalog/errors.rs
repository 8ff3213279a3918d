//! Catalog error types
//!
//! Duplicate and not-found outcomes are ordinary control flow and are
//! reported as `false`, `None` or an empty collection. The only error the
//! catalog raises is a positional access outside the valid bounds.
//!
//! Error codes:
//! - BIBLIDX_OUT_OF_RANGE

use thiserror::Error;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Index outside `[0, len)`
    #[error("index {index} out of range for collection of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Slice bounds are inverted or run past the end
    #[error("slice {start}..{end} out of range for collection of length {len}")]
    SliceOutOfRange { start: usize, end: usize, len: usize },
}

impl CatalogError {
    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::OutOfRange { .. } | CatalogError::SliceOutOfRange { .. } => {
                "BIBLIDX_OUT_OF_RANGE"
            }
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
