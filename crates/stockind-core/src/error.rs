//! Error types for indicator calculations.

use thiserror::Error;

/// Precondition failures raised before any calculation runs.
///
/// Both kinds are recoverable by calling again with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Bad parameter for {indicator}: {message}")]
    BadParameter {
        indicator: &'static str,
        message: String,
    },

    #[error(
        "Insufficient history provided for {indicator}. \
         You provided {provided} periods of history when at least {required} is required."
    )]
    InsufficientHistory {
        indicator: &'static str,
        provided: usize,
        required: usize,
    },
}

impl IndicatorError {
    /// Build a bad parameter error.
    pub fn bad_parameter(indicator: &'static str, message: impl Into<String>) -> Self {
        Self::BadParameter {
            indicator,
            message: message.into(),
        }
    }
}

/// Result type alias for indicator operations.
pub type CalcResult<T> = Result<T, IndicatorError>;
