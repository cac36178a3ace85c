//! Moving average indicators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockind_core::validation::require_positive;
use stockind_core::{CalcResult, Indexed, Indicator, IndicatorResult, Quote};
use tracing::debug;

use crate::kernel::{chained_min_history, exponential_smoothing, first_index};

/// EMA result row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaResult {
    pub index: usize,
    pub date: DateTime<Utc>,
    /// Exponential moving average of close prices
    pub ema: Option<f64>,
}

impl Indexed for EmaResult {
    fn index(&self) -> usize {
        self.index
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl IndicatorResult for EmaResult {
    fn value(&self) -> Option<f64> {
        self.ema
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay. The
/// first value is the simple average of the first `period` closes.
#[derive(Debug, Clone)]
pub struct Ema {
    pub(crate) period: usize,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> CalcResult<Self> {
        require_positive("EMA", "Lookback period", period)?;
        Ok(Self { period })
    }

    /// Lookback period.
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Ema {
    type Output = EmaResult;

    fn calculate(&self, history: &[Quote]) -> CalcResult<Vec<EmaResult>> {
        self.validate_history(history)?;
        debug!(indicator = self.name(), quotes = history.len(), period = self.period, "calculating");

        let start = first_index(history, self.min_history());
        let ema = exponential_smoothing(history, self.period, start, |q| Some(q.close));

        Ok(history
            .iter()
            .zip(ema)
            .map(|(q, ema)| EmaResult {
                index: q.index,
                date: q.date,
                ema,
            })
            .collect())
    }

    fn min_history(&self) -> usize {
        chained_min_history(0, self.period)
    }

    fn name(&self) -> &'static str {
        "EMA"
    }
}

/// Calculate the EMA of close prices.
pub fn get_ema(history: &[Quote], lookback_period: usize) -> CalcResult<Vec<EmaResult>> {
    Ema::new(lookback_period)?.calculate(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::quotes_from_closes;
    use stockind_core::IndicatorError;

    #[test]
    fn test_ema() {
        let quotes = quotes_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let result = get_ema(&quotes, 3).unwrap();

        assert_eq!(result.len(), 5);
        assert!(result[0].ema.is_none());
        assert!(result[1].ema.is_none());
        assert!((result[2].ema.unwrap() - 2.0).abs() < 1e-10); // Initial SMA
        // mult = 2/(3+1) = 0.5
        // result[3] = 4 * 0.5 + 2 * 0.5 = 3.0
        assert!((result[3].ema.unwrap() - 3.0).abs() < 1e-10);
        assert!((result[4].ema.unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_rows_mirror_quotes() {
        let quotes = quotes_from_closes(&[10.0, 11.0, 12.0, 11.0]);
        let result = get_ema(&quotes, 2).unwrap();

        for (q, r) in quotes.iter().zip(&result) {
            assert_eq!(q.index, r.index);
            assert_eq!(q.date, r.date);
        }
    }

    #[test]
    fn test_ema_period_one_tracks_close() {
        let quotes = quotes_from_closes(&[3.0, 1.0, 4.0]);
        let result = get_ema(&quotes, 1).unwrap();

        let values: Vec<f64> = result.iter().filter_map(|r| r.ema).collect();
        assert_eq!(values, vec![3.0, 1.0, 4.0]);
    }

    #[test]
    fn test_ema_bad_period() {
        let err = Ema::new(0).unwrap_err();
        assert!(matches!(err, IndicatorError::BadParameter { indicator: "EMA", .. }));
    }

    #[test]
    fn test_ema_insufficient_history() {
        let quotes = quotes_from_closes(&[1.0, 2.0]);
        let err = get_ema(&quotes, 3).unwrap_err();

        assert_eq!(
            err,
            IndicatorError::InsufficientHistory {
                indicator: "EMA",
                provided: 2,
                required: 3,
            }
        );
    }
}
