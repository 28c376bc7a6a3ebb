//! Error types for timecard payroll.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions the strict calculation surface and the roster loader
//! can report.

use thiserror::Error;

/// The main error type for timecard payroll.
///
/// # Example
///
/// ```
/// use timecard_payroll::error::PayrollError;
///
/// let error = PayrollError::TimeEventsNotFound {
///     date: "2024-01-15".to_string(),
/// };
/// assert_eq!(error.to_string(), "Time events not found for date 2024-01-15");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee has no time-in or no time-out log at all.
    #[error("Missing time events for employee '{first_name}'")]
    MissingTimeEvents {
        /// The first name of the employee whose log is absent.
        first_name: String,
    },

    /// No time-in or no time-out punch was recorded for the date.
    #[error("Time events not found for date {date}")]
    TimeEventsNotFound {
        /// The date that was looked up.
        date: String,
    },

    /// A punch matched for the date carries an unparseable hour.
    #[error("Invalid hour recorded for date {date}")]
    InvalidHour {
        /// The date of the offending punch.
        date: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A payroll report could not be serialized.
    #[error("Failed to serialize payroll report: {message}")]
    ReportSerialization {
        /// A description of the serialization error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
