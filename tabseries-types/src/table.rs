//! Owned, ordered collections of records.
//!
//! Tables are plain values: operations elsewhere in the workspace borrow a
//! table and build a fresh one, so callers can keep using their originals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{LabeledRecord, Record};

/// Ordered sequence of dated price records.
///
/// The position of a record in the table is its (dense, 0-based) index.
/// Duplicate dates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Wrap an ordered list of records.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build a table from `(date, price)` pairs; `NaN` prices become missing.
    pub fn from_prices<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self {
            records: rows
                .into_iter()
                .map(|(date, price)| Record::new(date, price))
                .collect(),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Consume the table, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// The date column.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// The price column.
    #[must_use]
    pub fn prices(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.price).collect()
    }

    /// Earliest and latest date, or `None` for an empty table.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.date), hi.max(r.date))
        }))
    }

    /// True when dates are non-decreasing.
    #[must_use]
    pub fn is_sorted_by_date(&self) -> bool {
        self.records.windows(2).all(|w| w[0].date <= w[1].date)
    }

    /// Number of records with a missing price.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_missing()).count()
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Long-format table: several series stacked together, one label per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabeledTable {
    records: Vec<LabeledRecord>,
}

impl LabeledTable {
    /// Wrap an ordered list of labeled records.
    #[must_use]
    pub fn new(records: Vec<LabeledRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in order.
    #[must_use]
    pub fn records(&self) -> &[LabeledRecord] {
        &self.records
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabeledRecord> {
        self.records.iter()
    }

    /// Consume the table, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<LabeledRecord> {
        self.records
    }

    /// Distinct labels in order of first appearance.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.series_label.as_str()) {
                out.push(&r.series_label);
            }
        }
        out
    }

    /// Extract the rows carrying `label` as a plain table, preserving order.
    #[must_use]
    pub fn series(&self, label: &str) -> Table {
        self.records
            .iter()
            .filter(|r| r.series_label == label)
            .map(LabeledRecord::record)
            .collect()
    }
}

impl From<Vec<LabeledRecord>> for LabeledTable {
    fn from(records: Vec<LabeledRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<LabeledRecord> for LabeledTable {
    fn from_iter<T: IntoIterator<Item = LabeledRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LabeledTable {
    type Item = LabeledRecord;
    type IntoIter = std::vec::IntoIter<LabeledRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a LabeledTable {
    type Item = &'a LabeledRecord;
    type IntoIter = std::slice::Iter<'a, LabeledRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
