//! Indicator trait definition.

use crate::error::CalcResult;
use crate::traits::IndicatorResult;
use crate::types::Quote;
use crate::validation;

/// Trait for technical indicators computed over full quote history.
///
/// Parameters are validated when the indicator is constructed, so a value
/// implementing this trait always holds a usable configuration. History
/// is validated on every call, before any computation starts.
pub trait Indicator: Send + Sync {
    /// The result row produced for each quote.
    type Output: IndicatorResult;

    /// Calculate one result row per quote, in input order.
    ///
    /// # Arguments
    /// * `history` - Quotes ordered by date with 1-based contiguous indices
    ///
    /// # Errors
    /// Returns `IndicatorError::InsufficientHistory` when `history` is
    /// shorter than [`Indicator::min_history`].
    fn calculate(&self, history: &[Quote]) -> CalcResult<Vec<Self::Output>>;

    /// Minimum number of quotes needed for the first defined value.
    fn min_history(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &'static str;

    /// Validate that there's enough history.
    fn validate_history(&self, history: &[Quote]) -> CalcResult<()> {
        validation::require_history(self.name(), history.len(), self.min_history())
    }
}
