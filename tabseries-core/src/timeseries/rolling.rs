use crate::{Record, TabError, Table};

/// Trailing simple moving average over `window_size` rows.
///
/// - Each output row carries the date of the last row in its window.
/// - Leading rows without a full window are dropped, not padded.
/// - A window containing a missing price, or whose mean is `NaN` (e.g. from
///   `inf` and `-inf`), has no defined mean and is dropped as well, so the
///   output never contains missing prices. Forward-fill first (see
///   [`crate::fill_missing_values`]) for a complete series.
/// - A window larger than the table yields an empty table.
///
/// # Errors
/// Returns `Err(TabError::InvalidArg)` if `window_size` is zero.
///
/// ```
/// use chrono::NaiveDate;
/// use tabseries_core::{Table, simple_moving_average};
///
/// let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
/// let t = Table::from_prices((1..=5).map(|i| (d(i), f64::from(i))));
/// let sma = simple_moving_average(&t, 2).unwrap();
/// assert_eq!(sma.prices(), vec![Some(1.5), Some(2.5), Some(3.5), Some(4.5)]);
/// assert_eq!(sma.dates()[0], d(2));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tabseries_core::timeseries::simple_moving_average",
        skip(table),
        fields(rows = table.len(), window_size = window_size),
    )
)]
pub fn simple_moving_average(table: &Table, window_size: usize) -> Result<Table, TabError> {
    if window_size == 0 {
        return Err(TabError::invalid_arg("window_size must be positive"));
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = window_size as f64;
    let out: Table = table
        .records()
        .windows(window_size)
        .filter_map(|w| {
            let sum: Option<f64> = w.iter().map(Record::value).sum();
            let date = w.last()?.date;
            // inf + -inf inside a window has no mean either
            let mean = sum.map(|s| s / divisor).filter(|m| !m.is_nan())?;
            Some(Record {
                date,
                price: Some(mean),
            })
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        emitted = out.len(),
        dropped = table.len() - out.len(),
        "computed simple moving average"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, day).unwrap()
    }

    #[test]
    fn window_of_one_is_identity_on_complete_series() {
        let t = Table::from_prices([(d(1), 4.0), (d(2), 6.0)]);
        assert_eq!(simple_moving_average(&t, 1).unwrap(), t);
    }

    #[test]
    fn window_with_gap_is_dropped() {
        let t = Table::from_prices([(d(1), 1.0), (d(2), f64::NAN), (d(3), 3.0), (d(4), 5.0)]);
        let sma = simple_moving_average(&t, 2).unwrap();
        assert_eq!(sma.dates(), vec![d(4)]);
        assert_eq!(sma.prices(), vec![Some(4.0)]);
    }

    #[test]
    fn opposite_infinities_are_dropped() {
        let t = Table::from_prices([
            (d(1), f64::INFINITY),
            (d(2), f64::NEG_INFINITY),
            (d(3), 1.0),
        ]);
        let sma = simple_moving_average(&t, 2).unwrap();
        assert_eq!(sma.dates(), vec![d(3)]);
        assert_eq!(sma.prices(), vec![Some(f64::NEG_INFINITY)]);
        assert_eq!(sma.missing_count(), 0);
    }

    #[test]
    fn raw_nan_price_poisons_its_window() {
        let t = Table::new(vec![
            Record::new(d(1), 2.0),
            Record {
                date: d(2),
                price: Some(f64::NAN),
            },
            Record::new(d(3), 4.0),
        ]);
        assert!(simple_moving_average(&t, 2).unwrap().is_empty());
        assert_eq!(simple_moving_average(&t, 1).unwrap().dates(), vec![d(1), d(3)]);
    }
}
