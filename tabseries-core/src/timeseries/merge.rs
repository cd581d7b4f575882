use crate::{LabeledRecord, LabeledTable, Table};

/// Tag every row of `table` with the same `series_label`.
///
/// The input is left untouched; the result owns copies of its records.
#[must_use]
pub fn add_column(table: &Table, label: impl Into<String>) -> LabeledTable {
    let label = label.into();
    table.iter().map(|r| r.labeled(label.as_str())).collect()
}

/// Stack two tables into one long-format table tagged by origin.
///
/// - Row count is `a.len() + b.len()`; nothing is deduplicated.
/// - Rows are sorted by date. The sort is stable and `a` is stacked first, so
///   on equal dates rows from `a` precede rows from `b`.
///
/// ```
/// use chrono::NaiveDate;
/// use tabseries_core::{Table, merge};
///
/// let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
/// let a = Table::from_prices([(d(1), 10.0)]);
/// let b = Table::from_prices([(d(2), 20.0)]);
/// let merged = merge(&a, &b, "x", "y");
/// let rows: Vec<_> = merged
///     .iter()
///     .map(|r| (r.date, r.series_label.as_str(), r.price))
///     .collect();
/// assert_eq!(rows, vec![(d(1), "x", Some(10.0)), (d(2), "y", Some(20.0))]);
/// ```
#[must_use]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tabseries_core::timeseries::merge",
        skip(table_one, table_two, label_one, label_two),
        fields(rows_one = table_one.len(), rows_two = table_two.len()),
    )
)]
pub fn merge(
    table_one: &Table,
    table_two: &Table,
    label_one: impl Into<String>,
    label_two: impl Into<String>,
) -> LabeledTable {
    merge_labeled([(table_one, label_one.into()), (table_two, label_two.into())])
}

/// Stack any number of labeled tables, in input order, and sort by date.
///
/// Same semantics as [`merge`]: stable on equal dates, earlier inputs first.
#[must_use]
pub fn merge_labeled<'a, I, L>(series: I) -> LabeledTable
where
    I: IntoIterator<Item = (&'a Table, L)>,
    L: Into<String>,
{
    let mut records: Vec<LabeledRecord> = series
        .into_iter()
        .flat_map(|(table, label)| add_column(table, label).into_records())
        .collect();
    records.sort_by_key(|r| r.date);
    LabeledTable::new(records)
}
