//! Time-series utilities over price tables.
//!
//! Modules include:
//! - `fill`: insert missing calendar dates and forward-fill missing prices
//! - `rolling`: trailing simple moving average
//! - `merge`: tag tables with a series label and stack them by date
/// Date and value filling.
pub mod fill;
/// Labeling and long-format merging.
pub mod merge;
/// Rolling-window statistics.
pub mod rolling;
