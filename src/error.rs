//! Error types for the workload engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the calculation layer itself never fails: missing schedules,
//! empty assignment lists, and absent holiday data all degrade to zero-valued
//! output. Errors only arise from loading holiday calendar configuration.

use thiserror::Error;

/// The main error type for the workload engine.
///
/// # Example
///
/// ```
/// use workload_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays");
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

    /// A holiday calendar entry was invalid or inconsistent.
    #[error("Invalid holiday calendar '{country_code}': {message}")]
    InvalidCalendar {
        /// The country code of the invalid calendar.
        country_code: String,
        /// A description of what made the calendar invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/holidays".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/holidays"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/holidays/au.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/holidays/au.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_calendar_displays_country_and_message() {
        let error = EngineError::InvalidCalendar {
            country_code: "AU".to_string(),
            message: "duplicate country code".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid holiday calendar 'AU': duplicate country code"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
