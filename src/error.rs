//! Error types for the Child Support Assessment Engine.
//!
//! The calculation itself is total and never fails. Errors only arise at the
//! edges: loading rate tables from disk, selecting a rate year, and
//! validating caller-supplied inputs before they reach the engine.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Child Support Assessment Engine.
///
/// # Example
///
/// ```
/// use child_support_engine::error::EngineError;
///
/// let error = EngineError::RateYearNotFound {
///     financial_year: "1999-2000".to_string(),
/// };
/// assert_eq!(error.to_string(), "No rate table found for financial year 1999-2000");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table parsed correctly but its contents are unusable.
    #[error("Invalid rate table for {financial_year}: {message}")]
    InvalidRateTable {
        /// The financial year of the offending table.
        financial_year: String,
        /// What is wrong with the table.
        message: String,
    },

    /// No rate table is loaded for the requested financial year.
    #[error("No rate table found for financial year {financial_year}")]
    RateYearNotFound {
        /// The requested financial year (e.g. "2024-2025").
        financial_year: String,
    },

    /// The configuration holds no rate tables at all.
    #[error("No rate tables are loaded")]
    NoRateTables,

    /// No rate table is in effect on the requested date.
    #[error("No rate table in effect on {date}")]
    NoRateForDate {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A calculation input failed boundary validation.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
