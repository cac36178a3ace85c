//! Configuration structures.

use serde::{Deserialize, Serialize};
use stockind_core::CalcResult;
use stockind_indicators::{Ema, Macd, Rsi, StochRsi};

use crate::error::ConfigurationError;

/// Default indicator parameters and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IndicatorConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ema: EmaSettings,
    #[serde(default)]
    pub rsi: RsiSettings,
    #[serde(default)]
    pub macd: MacdSettings,
    #[serde(default)]
    pub stoch_rsi: StochRsiSettings,
}

impl IndicatorConfig {
    /// Build the configured EMA.
    pub fn ema(&self) -> CalcResult<Ema> {
        Ema::new(self.ema.lookback_period)
    }

    /// Build the configured RSI.
    pub fn rsi(&self) -> CalcResult<Rsi> {
        Rsi::new(self.rsi.lookback_period)
    }

    /// Build the configured MACD.
    pub fn macd(&self) -> CalcResult<Macd> {
        let m = &self.macd;
        Macd::with_periods(m.fast_period, m.slow_period, m.signal_period)
    }

    /// Build the configured Stochastic RSI.
    pub fn stoch_rsi(&self) -> CalcResult<StochRsi> {
        StochRsi::new(self.stoch_rsi.lookback_period)
    }

    /// Check that every configured indicator can be built.
    pub fn validate(&self) -> CalcResult<()> {
        self.ema()?;
        self.rsi()?;
        self.macd()?;
        self.stoch_rsi()?;
        Ok(())
    }

    /// Render as TOML, e.g. to write out a default configuration file.
    pub fn to_toml_string(&self) -> Result<String, ConfigurationError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// EMA settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmaSettings {
    pub lookback_period: usize,
}

impl Default for EmaSettings {
    fn default() -> Self {
        Self { lookback_period: 20 }
    }
}

/// RSI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiSettings {
    pub lookback_period: usize,
}

impl Default for RsiSettings {
    fn default() -> Self {
        Self { lookback_period: 14 }
    }
}

/// MACD settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdSettings {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdSettings {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

/// Stochastic RSI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StochRsiSettings {
    pub lookback_period: usize,
}

impl Default for StochRsiSettings {
    fn default() -> Self {
        Self { lookback_period: 14 }
    }
}
