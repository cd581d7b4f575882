//! Conversions between tables and `polars` data frames.
//!
//! Column names follow the long-format convention used downstream for
//! plotting and storage: `date`, `price`, and `series_label` for labeled
//! tables.

use polars::prelude::*;

use crate::{LabeledTable, Record, TabError, Table};

/// Column holding the calendar date.
pub const DATE_COLUMN: &str = "date";
/// Column holding the (nullable) price.
pub const PRICE_COLUMN: &str = "price";
/// Column holding the series label of a long-format table.
pub const LABEL_COLUMN: &str = "series_label";

/// Convert a table into a `polars` [`DataFrame`].
pub trait ToDataFrame {
    /// Build a data frame with one row per record.
    ///
    /// # Errors
    /// Propagates `polars` construction errors.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for Table {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            Column::new(DATE_COLUMN.into(), self.dates()),
            Column::new(PRICE_COLUMN.into(), self.prices()),
        ])
    }
}

impl ToDataFrame for LabeledTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let dates: Vec<chrono::NaiveDate> = self.iter().map(|r| r.date).collect();
        let labels: Vec<&str> = self.iter().map(|r| r.series_label.as_str()).collect();
        let prices: Vec<Option<f64>> = self.iter().map(|r| r.price).collect();
        DataFrame::new(vec![
            Column::new(DATE_COLUMN.into(), dates),
            Column::new(LABEL_COLUMN.into(), labels),
            Column::new(PRICE_COLUMN.into(), prices),
        ])
    }
}

/// Read a table from a data frame with `date` (Date) and `price` (Float64) columns.
///
/// Extra columns are ignored. Null prices become missing prices.
///
/// # Errors
/// Returns `Err(TabError::InvalidInput)` if either column is absent, has the
/// wrong dtype, or the date column contains nulls.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table, TabError> {
    let dates = df
        .column(DATE_COLUMN)
        .and_then(Column::date)
        .map_err(|e| TabError::invalid_input(format!("date column: {e}")))?;
    let prices = df
        .column(PRICE_COLUMN)
        .and_then(Column::f64)
        .map_err(|e| TabError::invalid_input(format!("price column: {e}")))?;

    dates
        .as_date_iter()
        .zip(prices.into_iter())
        .enumerate()
        .map(|(row, (date, price))| {
            let date = date
                .ok_or_else(|| TabError::invalid_input(format!("null date at row {row}")))?;
            Ok(Record {
                date,
                price: price.filter(|p| !p.is_nan()),
            })
        })
        .collect::<Result<Vec<Record>, TabError>>()
        .map(Table::new)
}
