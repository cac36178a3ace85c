//! Technical indicators computed over full quote history.
//!
//! Each indicator is an independent pure calculation: it validates its
//! parameters on construction and its history on every call, then
//! returns one result row per quote, aligned by index and date.
//!
//! - Moving averages (EMA)
//! - Momentum indicators (RSI, MACD)
//! - Stochastic RSI, chained over RSI results
//!
//! The [`kernel`] module holds the shared windowed-reduction and
//! trend-flag machinery.

pub mod kernel;
pub mod momentum;
pub mod moving_average;
pub mod stochastic;

#[cfg(test)]
mod test_util;

pub use momentum::{get_macd, get_rsi, Macd, MacdResult, Rsi, RsiResult};
pub use moving_average::{get_ema, Ema, EmaResult};
pub use stochastic::{get_stoch_rsi, StochRsi, StochRsiResult};
