//! Momentum indicators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockind_core::validation::{require_less_than, require_positive};
use stockind_core::{CalcResult, Indexed, Indicator, IndicatorResult, Quote};
use tracing::debug;

use crate::kernel::{
    chained_min_history, exponential_smoothing, first_index, row_at, trend_flags, Baseline,
};
use crate::moving_average::Ema;

/// RSI result row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiResult {
    pub index: usize,
    pub date: DateTime<Utc>,
    /// Relative strength index, 0 to 100
    pub rsi: Option<f64>,
    pub is_increasing: Option<bool>,
}

impl Indexed for RsiResult {
    fn index(&self) -> usize {
        self.index
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl IndicatorResult for RsiResult {
    fn value(&self) -> Option<f64> {
        self.rsi
    }
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    lookback_period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(lookback_period: usize) -> CalcResult<Self> {
        require_positive("RSI", "Lookback period", lookback_period)?;
        Ok(Self { lookback_period })
    }

    /// Lookback period.
    pub fn lookback_period(&self) -> usize {
        self.lookback_period
    }

    fn rsi(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss > 0.0 {
            100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
        } else {
            100.0
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self { lookback_period: 14 }
    }
}

impl Indicator for Rsi {
    type Output = RsiResult;

    fn calculate(&self, history: &[Quote]) -> CalcResult<Vec<RsiResult>> {
        self.validate_history(history)?;
        debug!(
            indicator = self.name(),
            quotes = history.len(),
            lookback = self.lookback_period,
            "calculating"
        );

        let start = first_index(history, self.min_history());
        let period = self.lookback_period as f64;

        let mut results = Vec::with_capacity(history.len());
        let mut prev_close: Option<f64> = None;
        let (mut sum_gain, mut sum_loss) = (0.0, 0.0);
        let mut averages: Option<(f64, f64)> = None;

        for quote in history {
            // The first quote has no prior close and counts as no change
            let change = prev_close.map_or(0.0, |prev| quote.close - prev);
            prev_close = Some(quote.close);
            let (gain, loss) = if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            };

            averages = match averages {
                // Wilder's smoothing: avg = (prev_avg * (period-1) + value) / period
                Some((avg_gain, avg_loss)) => Some((
                    (avg_gain * (period - 1.0) + gain) / period,
                    (avg_loss * (period - 1.0) + loss) / period,
                )),
                None => {
                    sum_gain += gain;
                    sum_loss += loss;
                    (quote.index >= start).then(|| (sum_gain / period, sum_loss / period))
                }
            };

            results.push(RsiResult {
                index: quote.index,
                date: quote.date,
                rsi: averages.map(|(gain, loss)| Self::rsi(gain, loss)),
                is_increasing: None,
            });
        }

        let values: Vec<Option<f64>> = results.iter().map(|r| r.rsi).collect();
        for (result, flag) in results.iter_mut().zip(trend_flags(&values, Baseline::Previous)) {
            result.is_increasing = flag;
        }

        Ok(results)
    }

    fn min_history(&self) -> usize {
        chained_min_history(0, self.lookback_period)
    }

    fn name(&self) -> &'static str {
        "RSI"
    }
}

/// Calculate the RSI of close prices.
pub fn get_rsi(history: &[Quote], lookback_period: usize) -> CalcResult<Vec<RsiResult>> {
    Rsi::new(lookback_period)?.calculate(history)
}

/// MACD result row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    pub index: usize,
    pub date: DateTime<Utc>,
    /// MACD line (fast EMA - slow EMA)
    pub macd: Option<f64>,
    /// Signal line (EMA of MACD)
    pub signal: Option<f64>,
    /// Histogram (MACD - Signal)
    pub histogram: Option<f64>,
    /// Histogram above zero
    pub is_bullish: Option<bool>,
    /// Histogram magnitude widening
    pub is_diverging: Option<bool>,
}

impl Indexed for MacdResult {
    fn index(&self) -> usize {
        self.index
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl IndicatorResult for MacdResult {
    fn value(&self) -> Option<f64> {
        self.macd
    }
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum. The signal
/// line is a windowed reduction over the MACD line itself, so its
/// minimum history is the slow EMA's plus the signal period.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_ema: Ema,
    slow_ema: Ema,
    signal_period: usize,
}

impl Macd {
    /// Create a MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self {
            fast_ema: Ema { period: 12 },
            slow_ema: Ema { period: 26 },
            signal_period: 9,
        }
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> CalcResult<Self> {
        require_positive("MACD", "Fast period", fast)?;
        require_positive("MACD", "Slow period", slow)?;
        require_positive("MACD", "Signal period", signal)?;
        require_less_than("MACD", ("Fast period", fast), ("slow period", slow))?;

        Ok(Self {
            fast_ema: Ema::new(fast)?,
            slow_ema: Ema::new(slow)?,
            signal_period: signal,
        })
    }

    /// Fast, slow and signal periods.
    pub fn periods(&self) -> (usize, usize, usize) {
        (self.fast_ema.period(), self.slow_ema.period(), self.signal_period)
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for Macd {
    type Output = MacdResult;

    fn calculate(&self, history: &[Quote]) -> CalcResult<Vec<MacdResult>> {
        self.validate_history(history)?;
        let (fast, slow, signal) = self.periods();
        debug!(indicator = self.name(), quotes = history.len(), fast, slow, signal, "calculating");

        let fast_ema = self.fast_ema.calculate(history)?;
        let slow_ema = self.slow_ema.calculate(history)?;

        let mut results: Vec<MacdResult> = fast_ema
            .iter()
            .map(|f| {
                let slow_value = row_at(&slow_ema, f.index).and_then(|s| s.ema);
                MacdResult {
                    index: f.index,
                    date: f.date,
                    macd: f.ema.zip(slow_value).map(|(fast_value, slow_value)| fast_value - slow_value),
                    signal: None,
                    histogram: None,
                    is_bullish: None,
                    is_diverging: None,
                }
            })
            .collect();

        let start = first_index(&results, self.min_history());
        let signals = exponential_smoothing(&results, self.signal_period, start, |r| r.macd);
        for (result, signal) in results.iter_mut().zip(signals) {
            result.signal = signal;
            result.histogram = result.macd.zip(signal).map(|(macd, signal)| macd - signal);
        }

        let histograms: Vec<Option<f64>> = results.iter().map(|r| r.histogram).collect();
        let magnitudes: Vec<Option<f64>> = histograms.iter().map(|h| h.map(f64::abs)).collect();
        let bullish = trend_flags(&histograms, Baseline::Level(0.0));
        let diverging = trend_flags(&magnitudes, Baseline::Previous);

        for ((result, is_bullish), is_diverging) in results.iter_mut().zip(bullish).zip(diverging) {
            result.is_bullish = is_bullish;
            result.is_diverging = is_diverging;
        }

        Ok(results)
    }

    fn min_history(&self) -> usize {
        chained_min_history(self.slow_ema.min_history(), self.signal_period)
    }

    fn name(&self) -> &'static str {
        "MACD"
    }
}

/// Calculate MACD of close prices.
pub fn get_macd(
    history: &[Quote],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> CalcResult<Vec<MacdResult>> {
    Macd::with_periods(fast_period, slow_period, signal_period)?.calculate(history)
}
