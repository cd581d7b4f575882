//! tabseries fills, smooths, and merges dated price series.
//!
//! Overview
//! - Operates on in-memory [`Table`]s of `(date, price)` records; missing
//!   prices are `None`, never a sentinel float.
//! - Every operation borrows its input and returns a new table.
//! - [`Pipeline`] chains the operations according to a serde-serializable
//!   [`PipelineConfig`] and validates it up front.
//!
//! Key behaviors and trade-offs
//! - Date filling: one row per calendar day between the first and last date;
//!   inserted rows repeat the previous price.
//! - Forward filling: last observation carried forward; a missing first
//!   price stays missing.
//! - Moving average: trailing window, incomplete or gappy windows are
//!   dropped rather than padded.
//! - Merging: long format with a `series_label` column, stable on equal
//!   dates so the first table's rows come first.
//!
//! Examples
//! Filling a gap and merging two series:
//! ```
//! use chrono::NaiveDate;
//! use tabseries::{Pipeline, Table};
//!
//! let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
//! let brent = Table::from_prices([(d(1), 60.0), (d(3), 62.0)]);
//! let wti = Table::from_prices([(d(2), 55.0)]);
//!
//! let pipeline = Pipeline::builder().build()?;
//! let merged = pipeline.run_merged(&brent, &wti, "brent", "wti")?;
//! assert_eq!(merged.len(), 4);
//! assert_eq!(merged.labels(), vec!["brent", "wti"]);
//! # Ok::<(), tabseries::TabError>(())
//! ```
//!
//! See `tabseries/examples/` for runnable demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Pipeline, PipelineBuilder};

// Re-export core operations and types for convenience
pub use tabseries_core::{
    LabeledRecord, LabeledTable, PipelineConfig, Record, TabError, Table, add_column, fill_dates,
    fill_missing_values, merge, merge_labeled, simple_moving_average,
};

#[cfg(feature = "dataframe")]
pub use tabseries_core::{ToDataFrame, table_from_dataframe};
