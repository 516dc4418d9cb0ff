//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
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

    /// A timesheet or production record was invalid or inconsistent.
    #[error("Invalid record for employee '{employee_id}': {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// No bonus rate was found for the given employee and machine.
    #[error("Bonus rate not found for employee '{employee_id}' on machine '{machine}'")]
    RateNotFound {
        /// The employee id the rate was requested for.
        employee_id: String,
        /// The machine the rate was requested for.
        machine: String,
    },

    /// A pay period's salary computation failed.
    #[error("Salary computation failed for period starting {period_start}: {message}")]
    PeriodError {
        /// The start date of the failed period.
        period_start: NaiveDate,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
