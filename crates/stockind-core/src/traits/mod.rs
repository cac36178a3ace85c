//! Core traits for indicator calculations.

mod indicator;
mod series;

pub use indicator::Indicator;
pub use series::{first_defined_index, remove_warmup, Indexed, IndicatorResult};
