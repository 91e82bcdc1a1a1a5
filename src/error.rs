//! Error types for the CESU Salary Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The taxonomy splits into two families: invalid-argument errors, which
//! abort a calculation immediately, and holiday-feed errors, which the feed
//! loader downgrades to warnings because holiday data is best-effort.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the CESU Salary Calculation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use cesu_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month: 13 (must be between 1 and 12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The year is outside the supported Gregorian range.
    #[error("Invalid year: {year} (must be between 1 and 9999)")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// The month is outside the 1-12 range.
    #[error("Invalid month: {month} (must be between 1 and 12)")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// The hourly rate is zero or negative.
    #[error("Hourly rate must be greater than 0, got {rate}")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// The transport allowance is negative.
    #[error("Transport allowance cannot be negative, got {amount}")]
    InvalidAllowance {
        /// The rejected allowance amount.
        amount: Decimal,
    },

    /// The holiday feed could not be downloaded.
    #[error("Failed to download holiday feed from '{url}': {message}")]
    FeedDownload {
        /// The URL that was requested.
        url: String,
        /// A description of the transport or HTTP error.
        message: String,
    },

    /// The local holiday feed file could not be read.
    #[error("Failed to read holiday feed '{path}': {message}")]
    FeedRead {
        /// The path that could not be read.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// The downloaded holiday feed could not be written to the cache file.
    #[error("Failed to write holiday feed '{path}': {message}")]
    FeedWrite {
        /// The path that could not be written.
        path: String,
        /// A description of the I/O error.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_month_displays_month() {
        let error = EngineError::InvalidMonth { month: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid month: 0 (must be between 1 and 12)"
        );
    }

    #[test]
    fn test_invalid_year_displays_year() {
        let error = EngineError::InvalidYear { year: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid year: 0 (must be between 1 and 9999)"
        );
    }

    #[test]
    fn test_invalid_rate_displays_rate() {
        let error = EngineError::InvalidRate {
            rate: Decimal::from_str("-1.5").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Hourly rate must be greater than 0, got -1.5"
        );
    }

    #[test]
    fn test_invalid_allowance_displays_amount() {
        let error = EngineError::InvalidAllowance {
            amount: Decimal::from_str("-60.0").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Transport allowance cannot be negative, got -60.0"
        );
    }

    #[test]
    fn test_feed_download_displays_url_and_message() {
        let error = EngineError::FeedDownload {
            url: "https://example.invalid/feed.ics".to_string(),
            message: "connection timed out".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to download holiday feed from 'https://example.invalid/feed.ics': connection timed out"
        );
    }

    #[test]
    fn test_feed_read_displays_path_and_message() {
        let error = EngineError::FeedRead {
            path: "missing.ics".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read holiday feed 'missing.ics': permission denied"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "monetary amount overflows the decimal range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: monetary amount overflows the decimal range"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth { month: 13 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
