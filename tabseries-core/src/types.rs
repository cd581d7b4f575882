//! Re-export of foundational types from `tabseries-types`.
// Downstream crates can depend on `tabseries-core` alone and still name every model type

pub use tabseries_types::TabError;
pub use tabseries_types::{LabeledRecord, LabeledTable, Record, Table};

pub use tabseries_types::PipelineConfig;

#[cfg(feature = "dataframe")]
pub use crate::dataframe::{ToDataFrame, table_from_dataframe};
