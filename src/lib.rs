//! Technical analysis indicators over ordered quote history.
//!
//! Re-exports the workspace crates:
//! - [`types`]: quotes, result row traits, errors and validation
//! - [`indicators`]: the calculation kernel and indicators
//! - [`settings`]: layered settings and logging setup
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use stockind::types::index_quotes;
//! use stockind::indicators::get_stoch_rsi;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let quotes = index_quotes((0..40).map(|i| {
//!     let close = 100.0 + (i as f64 * 0.4).sin() * 5.0;
//!     (start + Duration::days(i), close, close, close, close, 1_000.0)
//! }));
//!
//! let results = get_stoch_rsi(&quotes, 14)?;
//! assert_eq!(results.len(), quotes.len());
//! assert!(results[26].stoch_rsi.is_none());
//! # Ok::<(), stockind::IndicatorError>(())
//! ```

pub use stockind_config as settings;
pub use stockind_core as types;
pub use stockind_indicators as indicators;

pub use stockind_core::{CalcResult, Indicator, IndicatorError, IndicatorResult, Quote};
