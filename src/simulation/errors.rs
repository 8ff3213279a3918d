//! Simulation error types
//!
//! Error codes:
//! - BIBLIDX_SIM_CONFIG_READ
//! - BIBLIDX_SIM_CONFIG_INVALID
//! - BIBLIDX_SIM_CATALOG
//! - BIBLIDX_SIM_RANDOM_SOURCE

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors raised while configuring or running a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration file could not be read or parsed
    #[error("failed to read simulation config: {0}")]
    ConfigRead(String),

    /// The event table has no entries
    #[error("event table is empty")]
    EmptyEventTable,

    /// A weight is negative, NaN or infinite
    #[error("invalid weight {weight} for event '{event}'")]
    InvalidWeight { event: String, weight: f64 },

    /// All weights are zero
    #[error("event weights sum to zero")]
    ZeroTotalWeight,

    /// A name pool used to generate books is empty
    #[error("pool '{0}' must not be empty")]
    EmptyPool(&'static str),

    /// `min_year` is after `max_year`
    #[error("year range {min}..={max} is empty")]
    InvalidYearRange { min: i32, max: i32 },

    /// A random source drew a position outside the choices it was given
    #[error("random source drew index {index} from {len} choices")]
    RandomOutOfRange { index: usize, len: usize },

    /// The library rejected a positional access
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl SimulationError {
    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SimulationError::ConfigRead(_) => "BIBLIDX_SIM_CONFIG_READ",
            SimulationError::EmptyEventTable
            | SimulationError::InvalidWeight { .. }
            | SimulationError::ZeroTotalWeight
            | SimulationError::EmptyPool(_)
            | SimulationError::InvalidYearRange { .. } => "BIBLIDX_SIM_CONFIG_INVALID",
            SimulationError::RandomOutOfRange { .. } => "BIBLIDX_SIM_RANDOM_SOURCE",
            SimulationError::Catalog(_) => "BIBLIDX_SIM_CATALOG",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SimulationError::ConfigRead("x".into()).code(),
            "BIBLIDX_SIM_CONFIG_READ"
        );
        assert_eq!(SimulationError::ZeroTotalWeight.code(), "BIBLIDX_SIM_CONFIG_INVALID");
        assert_eq!(
            SimulationError::RandomOutOfRange { index: 9, len: 7 }.code(),
            "BIBLIDX_SIM_RANDOM_SOURCE"
        );
        assert_eq!(
            SimulationError::from(CatalogError::OutOfRange { index: 1, len: 0 }).code(),
            "BIBLIDX_SIM_CATALOG"
        );
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let err = SimulationError::from(CatalogError::OutOfRange { index: 1, len: 0 });
        assert_eq!(err.to_string(), "index 1 out of range for collection of length 0");
    }
}
