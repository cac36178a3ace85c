//! Core types and traits for indicator calculations.
//!
//! This crate provides the foundational building blocks including:
//! - Quote history (`Quote`, `index_quotes`)
//! - Result row traits shared by every indicator output
//! - The `Indicator` trait and precondition validators
//! - Error types for bad parameters and insufficient history

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{CalcResult, IndicatorError};
pub use traits::*;
pub use types::*;
