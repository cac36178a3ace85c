//! Precondition checks shared by all indicators.
//!
//! Parameter checks run at construction; history checks run at the start
//! of each calculation. Neither has side effects beyond a `warn!` event.

use tracing::warn;

use crate::error::{CalcResult, IndicatorError};

/// Require a lookback-style parameter to be at least 1.
pub fn require_positive(indicator: &'static str, parameter: &str, value: usize) -> CalcResult<()> {
    if value == 0 {
        warn!(indicator, parameter, "rejected non-positive parameter");
        return Err(IndicatorError::bad_parameter(
            indicator,
            format!("{parameter} must be greater than 0."),
        ));
    }
    Ok(())
}

/// Require `lower` to be strictly less than `upper`.
pub fn require_less_than(
    indicator: &'static str,
    (lower_name, lower): (&str, usize),
    (upper_name, upper): (&str, usize),
) -> CalcResult<()> {
    if lower >= upper {
        warn!(indicator, lower, upper, "rejected parameter ordering");
        return Err(IndicatorError::bad_parameter(
            indicator,
            format!("{lower_name} ({lower}) must be less than {upper_name} ({upper})."),
        ));
    }
    Ok(())
}

/// Require at least `required` periods of history.
pub fn require_history(indicator: &'static str, provided: usize, required: usize) -> CalcResult<()> {
    if provided < required {
        warn!(indicator, provided, required, "insufficient history");
        return Err(IndicatorError::InsufficientHistory {
            indicator,
            provided,
            required,
        });
    }
    Ok(())
}
