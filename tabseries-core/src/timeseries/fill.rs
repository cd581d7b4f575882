use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{Record, TabError, Table};

/// Insert every missing calendar day between the earliest and latest date.
///
/// - Synthesized rows start with a missing price and are then forward-filled
///   from their predecessor (see [`fill_missing_values`]).
/// - The result is sorted by date. The sort is stable, so duplicate input
///   dates keep their relative order.
/// - A table without gaps still comes back sorted and forward-filled, which
///   makes the operation idempotent.
///
/// # Errors
/// Returns `Err(TabError::InvalidInput)` if the table is empty, since no date
/// range can be derived from it.
///
/// ```
/// use chrono::NaiveDate;
/// use tabseries_core::{Table, fill_dates};
///
/// let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
/// let t = Table::from_prices([(d(1), 5.0), (d(3), 7.0)]);
/// let filled = fill_dates(&t).unwrap();
/// assert_eq!(filled.dates(), vec![d(1), d(2), d(3)]);
/// assert_eq!(filled.prices(), vec![Some(5.0), Some(5.0), Some(7.0)]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tabseries_core::timeseries::fill_dates",
        skip(table),
        fields(rows = table.len()),
    )
)]
pub fn fill_dates(table: &Table) -> Result<Table, TabError> {
    let Some((first, last)) = table.date_range() else {
        return Err(TabError::invalid_input(
            "cannot fill dates of an empty table: no date range",
        ));
    };

    let present: BTreeSet<NaiveDate> = table.iter().map(|r| r.date).collect();
    let missing: Vec<Record> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| !present.contains(d))
        .map(Record::missing)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        synthesized = missing.len(),
        %first,
        %last,
        "inserted missing calendar dates"
    );

    let mut records: Vec<Record> = Vec::with_capacity(table.len() + missing.len());
    records.extend_from_slice(table.records());
    records.extend(missing);
    records.sort_by_key(|r| r.date);
    Ok(fill_missing_values(&Table::new(records)))
}

/// Forward-fill missing prices (last observation carried forward).
///
/// Rows are visited in their current order; the table is not re-sorted.
/// Row 0 is never modified, so a leading run of missing prices survives.
/// Nothing is interpolated or back-filled.
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tabseries_core::timeseries::fill_missing_values",
        skip(table),
        fields(rows = table.len(), missing = table.missing_count()),
    )
)]
pub fn fill_missing_values(table: &Table) -> Table {
    let mut records: Vec<Record> = table.records().to_vec();
    for i in 1..records.len() {
        if records[i].is_missing() {
            records[i].price = records[i - 1].value();
        }
    }
    Table::new(records)
}
