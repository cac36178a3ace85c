//! Configuration errors.

use stockind_core::IndicatorError;
use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid indicator settings: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}
