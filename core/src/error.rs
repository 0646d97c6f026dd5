//! Unified error types for the carhire core
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors (preconditions, physical state, lookups)
//! - `ParseError`: Driver records and text command parsing
//! - `ConfigError`: Environment configuration errors
//!
//! Business refusals (an ineligible driver, a terminated rental that never
//! existed) are not errors. They are returned as plain values.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A caller broke an argument contract (negative amount, malformed plate, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not permitted in the entity's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Parse error for driver records and shell commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Invalid driver record: {0}")]
    InvalidRecord(String),
}

impl From<DomainError> for ParseError {
    fn from(e: DomainError) -> Self {
        ParseError::InvalidArgument(e.to_string())
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidCount { name: &'static str, value: String },

    #[error("CARHIRE_TODAY must be a YYYY-MM-DD date, got '{0}'")]
    InvalidDate(String),

    #[error("Unknown plate source '{0}', expected 'canonical' or 'random'")]
    UnknownPlateSource(String),

    #[error("The canonical plate list holds {available} plates but {requested} were requested")]
    NotEnoughPlates { requested: usize, available: usize },

    #[error("A fleet of {large} large and {small} small vehicles is too large")]
    FleetTooLarge { large: usize, small: usize },
}
