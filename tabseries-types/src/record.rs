//! Row types: a dated price and its labeled counterpart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated observation. `price` is `None` when the value is missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Observed price, or `None` when missing.
    pub price: Option<f64>,
}

impl Record {
    /// Build a record from a raw float. `NaN` is treated as a missing price.
    #[must_use]
    pub const fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price: if price.is_nan() { None } else { Some(price) },
        }
    }

    /// Build a record with a missing price.
    #[must_use]
    pub const fn missing(date: NaiveDate) -> Self {
        Self { date, price: None }
    }

    /// True when the price is absent or `NaN`.
    ///
    /// The field is public, so a `Some(NaN)` can bypass [`Record::new`];
    /// it counts as missing everywhere.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        match self.price {
            Some(p) => p.is_nan(),
            None => true,
        }
    }

    /// The price with `NaN` normalized to `None`.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.price {
            Some(p) if !p.is_nan() => Some(p),
            _ => None,
        }
    }

    /// Attach a series label, producing a [`LabeledRecord`].
    pub fn labeled(&self, label: impl Into<String>) -> LabeledRecord {
        LabeledRecord {
            date: self.date,
            series_label: label.into(),
            price: self.price,
        }
    }
}

/// A record tagged with the name of the series it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Originating series label.
    pub series_label: String,
    /// Observed price, or `None` when missing.
    pub price: Option<f64>,
}

impl LabeledRecord {
    /// Drop the label, returning the plain record.
    #[must_use]
    pub const fn record(&self) -> Record {
        Record {
            date: self.date,
            price: self.price,
        }
    }
}
