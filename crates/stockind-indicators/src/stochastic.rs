//! Stochastic oscillators over derived series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockind_core::validation::require_positive;
use stockind_core::{CalcResult, Indexed, Indicator, IndicatorResult, Quote};
use tracing::debug;

use crate::kernel::{chained_min_history, first_index, trend_flags, window_range_position, Baseline};
use crate::momentum::Rsi;

/// Stochastic RSI result row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochRsiResult {
    pub index: usize,
    pub date: DateTime<Utc>,
    /// Position of RSI within its trailing range, 0 to 1
    pub stoch_rsi: Option<f64>,
    pub is_increasing: Option<bool>,
}

impl Indexed for StochRsiResult {
    fn index(&self) -> usize {
        self.index
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl IndicatorResult for StochRsiResult {
    fn value(&self) -> Option<f64> {
        self.stoch_rsi
    }
}

/// Stochastic RSI.
///
/// Applies the stochastic formula to RSI values instead of prices:
/// `(rsi - lowest rsi) / (highest rsi - lowest rsi)` over the lookback
/// window. The RSI series is computed with the same lookback period, so
/// the first value needs twice the lookback of history.
#[derive(Debug, Clone, Default)]
pub struct StochRsi {
    rsi: Rsi,
}

impl StochRsi {
    /// Create a new Stochastic RSI.
    pub fn new(lookback_period: usize) -> CalcResult<Self> {
        require_positive("Stochastic RSI", "Lookback period", lookback_period)?;
        Ok(Self {
            rsi: Rsi::new(lookback_period)?,
        })
    }

    /// Lookback period.
    pub fn lookback_period(&self) -> usize {
        self.rsi.lookback_period()
    }
}

impl Indicator for StochRsi {
    type Output = StochRsiResult;

    fn calculate(&self, history: &[Quote]) -> CalcResult<Vec<StochRsiResult>> {
        self.validate_history(history)?;
        let lookback = self.lookback_period();
        debug!(indicator = self.name(), quotes = history.len(), lookback, "calculating");

        let rsi_results = self.rsi.calculate(history)?;
        let start = first_index(&rsi_results, self.min_history());

        let mut results: Vec<StochRsiResult> = rsi_results
            .iter()
            .map(|r| {
                let stoch_rsi = if r.index >= start {
                    window_range_position(&rsi_results, r.index, lookback, |x| x.rsi)
                } else {
                    None
                };
                StochRsiResult {
                    index: r.index,
                    date: r.date,
                    stoch_rsi,
                    is_increasing: None,
                }
            })
            .collect();

        let values: Vec<Option<f64>> = results.iter().map(|r| r.stoch_rsi).collect();
        for (result, flag) in results.iter_mut().zip(trend_flags(&values, Baseline::Previous)) {
            result.is_increasing = flag;
        }

        Ok(results)
    }

    fn min_history(&self) -> usize {
        chained_min_history(self.rsi.min_history(), self.lookback_period())
    }

    fn name(&self) -> &'static str {
        "Stochastic RSI"
    }
}

/// Calculate Stochastic RSI of close prices.
pub fn get_stoch_rsi(history: &[Quote], lookback_period: usize) -> CalcResult<Vec<StochRsiResult>> {
    StochRsi::new(lookback_period)?.calculate(history)
}
