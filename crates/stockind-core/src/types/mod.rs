//! Core data types for indicator calculations.

mod quote;

pub use quote::{index_quotes, Quote};
