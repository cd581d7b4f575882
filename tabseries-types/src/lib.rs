//! Record, table, error, and configuration primitives for tabseries.
#![warn(missing_docs)]

mod config;
mod error;
mod record;
mod table;

pub use config::PipelineConfig;
pub use error::TabError;
pub use record::{LabeledRecord, Record};
pub use table::{LabeledTable, Table};
