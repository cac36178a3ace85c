//! Row traits shared by quotes and indicator results.

use chrono::{DateTime, Utc};

/// A row positioned in an ordered history.
pub trait Indexed {
    /// 1-based position in the history.
    fn index(&self) -> usize;

    /// Timestamp of the period.
    fn date(&self) -> DateTime<Utc>;
}

/// An indicator output row.
///
/// Every indicator emits exactly one row per input quote. Values that need
/// more lookback than is available at a row are `None`, never zero.
pub trait IndicatorResult: Indexed {
    /// The indicator's primary value at this row, if defined.
    fn value(&self) -> Option<f64>;
}

/// Index of the first row that carries a primary value.
pub fn first_defined_index<R: IndicatorResult>(results: &[R]) -> Option<usize> {
    results
        .iter()
        .find(|r| r.value().is_some())
        .map(Indexed::index)
}

/// Drop the leading rows whose primary value is not yet defined.
///
/// Rows after the first defined one are kept as-is, including any later
/// rows whose value is undefined.
pub fn remove_warmup<R: IndicatorResult>(results: Vec<R>) -> Vec<R> {
    let skip = results
        .iter()
        .position(|r| r.value().is_some())
        .unwrap_or(results.len());
    results.into_iter().skip(skip).collect()
}
