//! Configuration management.
//!
//! Settings are layered: an optional TOML file, then environment
//! variables prefixed with `STOCKIND` using `__` as the section
//! separator (`STOCKIND__RSI__LOOKBACK_PERIOD=9`).

mod error;
mod logging;
mod settings;

pub use error::ConfigurationError;
pub use logging::setup_logging;
pub use settings::{
    EmaSettings, IndicatorConfig, LogFormat, LoggingConfig, MacdSettings, RsiSettings,
    StochRsiSettings,
};

use config::{Config, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STOCKIND";

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<IndicatorConfig, ConfigurationError> {
    debug!(path = %path.display(), "loading configuration");
    build(File::from(path).required(true), environment())
}

/// Load configuration from a TOML string and the environment.
pub fn load_config_str(toml: &str) -> Result<IndicatorConfig, ConfigurationError> {
    build(File::from_str(toml, FileFormat::Toml), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn build<F>(file: F, env: Environment) -> Result<IndicatorConfig, ConfigurationError>
where
    F: config::Source + Send + Sync + 'static,
{
    let config = Config::builder().add_source(file).add_source(env).build()?;
    let settings: IndicatorConfig = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
