//! tabseries-core
//!
//! Pure operations over dated price tables. Every function borrows its
//! inputs and returns a freshly built table; nothing is mutated in place.
//!
//! - `types`: re-exported records, tables, errors, and configuration.
//! - `timeseries`: date filling, forward filling, moving averages, merging.
//! - `dataframe` (feature `dataframe`): conversions to and from `polars`.
//!
//! Logging
//! -------
//! With the `tracing` feature enabled, each public operation opens a span
//! carrying its row counts and emits a `debug` event summarizing what it
//! synthesized or dropped. Without the feature no logging code is compiled.
//!
#![warn(missing_docs)]

/// Conversions to and from `polars` data frames.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Time-series utilities for filling, averaging, and merging.
pub mod timeseries;
pub mod types;

pub use timeseries::fill::{fill_dates, fill_missing_values};
pub use timeseries::merge::{add_column, merge, merge_labeled};
pub use timeseries::rolling::simple_moving_average;
pub use types::*;
