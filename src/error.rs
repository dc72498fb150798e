//! Error types for yield and economics calculations

use thiserror::Error;

/// Failure while deriving economic figures for a crop
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// The plant record carries no per-unit cost
    #[error("crop '{crop}' has no costs")]
    MissingCosts { crop: String },

    /// The plant record carries no per-unit revenue
    #[error("crop '{crop}' has no revenue")]
    MissingRevenue { crop: String },
}

/// Failure while normalizing legacy crop records
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IngestError {
    /// A condition delta was a string other than the `"none"` marker
    #[error("invalid condition delta '{value}' (expected a number or \"none\")")]
    InvalidDelta { value: String },
}
