//! Quote history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Indexed;

/// One trading period of price data.
///
/// `index` is the 1-based position of the quote in its ordered history.
/// Indicator results mirror it, so rows can be matched across chained
/// calculations without relying on slice offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// 1-based position in the ordered history
    pub index: usize,
    /// Period timestamp
    pub date: DateTime<Utc>,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Quote {
    /// Create a new quote.
    pub fn new(
        index: usize,
        date: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            index,
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

impl Indexed for Quote {
    fn index(&self) -> usize {
        self.index
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Assign 1-based indices to bars given in date order.
///
/// Each bar is `(date, open, high, low, close, volume)`.
pub fn index_quotes<I>(bars: I) -> Vec<Quote>
where
    I: IntoIterator<Item = (DateTime<Utc>, f64, f64, f64, f64, f64)>,
{
    bars.into_iter()
        .enumerate()
        .map(|(i, (date, open, high, low, close, volume))| {
            Quote::new(i + 1, date, open, high, low, close, volume)
        })
        .collect()
}
