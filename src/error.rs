//! Error types for the Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while normalizing input,
//! loading configuration, or talking to the payment history API.

use thiserror::Error;

/// The main error type for the Settlement Engine.
///
/// The calculator and row builder are total functions and never produce
/// an error; every failure originates in input normalization, configuration
/// loading, or the payment history client.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settlement.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/settlement.yaml"
/// );
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

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// Why the value was refused.
        message: String,
    },

    /// A raw monetary field could not be normalized to a non-negative amount.
    #[error("Invalid amount for '{field}': {reason} (got '{value}')")]
    InvalidAmount {
        /// The field that held the value (e.g. "income").
        field: String,
        /// The raw value as entered.
        value: String,
        /// Why the value was refused.
        reason: String,
    },

    /// An ad-hoc expense entry was refused and not added.
    #[error("Expense entry '{name}' rejected: {reason}")]
    RejectedExpenseEntry {
        /// The trimmed name of the refused entry.
        name: String,
        /// Why the entry was refused.
        reason: String,
    },

    /// Payment API credentials are not configured.
    #[error("Missing payment API credentials: {variable} is not set")]
    MissingCredentials {
        /// The environment variable that was missing.
        variable: String,
    },

    /// The request to the payment API could not be completed.
    #[error("Payment API request failed: {message}")]
    PaymentsRequest {
        /// A description of the transport failure.
        message: String,
    },

    /// The payment API answered with a non-success status.
    #[error("Payment API returned status {status}: {detail}")]
    PaymentsApi {
        /// The HTTP status code returned upstream.
        status: u16,
        /// The response body returned upstream.
        detail: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<reqwest::Error> for EngineError {
    fn from(error: reqwest::Error) -> Self {
        EngineError::PaymentsRequest {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settlement.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settlement.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/settlement.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/settlement.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "management_fee".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'management_fee': must not be negative"
        );
    }

    #[test]
    fn test_invalid_amount_displays_field_reason_and_value() {
        let error = EngineError::InvalidAmount {
            field: "transport_cost".to_string(),
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'transport_cost': not a number (got 'abc')"
        );
    }

    #[test]
    fn test_rejected_expense_entry_displays_name_and_reason() {
        let error = EngineError::RejectedExpenseEntry {
            name: "Security".to_string(),
            reason: "amount must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Expense entry 'Security' rejected: amount must be greater than zero"
        );
    }

    #[test]
    fn test_payments_api_displays_status_and_detail() {
        let error = EngineError::PaymentsApi {
            status: 401,
            detail: "bad signature".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payment API returned status 401: bad signature"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_amount() -> EngineResult<()> {
            Err(EngineError::InvalidAmount {
                field: "income".to_string(),
                value: "-1".to_string(),
                reason: "must not be negative".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_amount()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
