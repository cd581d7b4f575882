use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use tabseries_core::{Record, Table, add_column, merge, merge_labeled};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn arb_table() -> impl Strategy<Value = Table> {
    proptest::collection::vec(
        (0u64..30, prop::option::weighted(0.9, 0.0f64..500.0)),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(off, price)| Record {
                date: day(off),
                price,
            })
            .collect::<Table>()
    })
}

fn stable_sorted(t: &Table) -> Table {
    let mut rows = t.records().to_vec();
    rows.sort_by_key(|r| r.date);
    Table::new(rows)
}

#[test]
fn two_single_row_tables() {
    let a = Table::from_prices([(day(0), 10.0)]);
    let b = Table::from_prices([(day(1), 20.0)]);
    let merged = merge(&a, &b, "x", "y");

    assert_eq!(
        merged.into_records(),
        vec![
            Record::new(day(0), 10.0).labeled("x"),
            Record::new(day(1), 20.0).labeled("y"),
        ]
    );
}

#[test]
fn first_table_wins_ties_on_equal_dates() {
    let a = Table::from_prices([(day(2), 1.0), (day(0), 2.0)]);
    let b = Table::from_prices([(day(0), 3.0), (day(2), 4.0)]);
    let merged = merge(&a, &b, "brent", "wti");

    let rows: Vec<(NaiveDate, &str)> = merged
        .iter()
        .map(|r| (r.date, r.series_label.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (day(0), "brent"),
            (day(0), "wti"),
            (day(2), "brent"),
            (day(2), "wti"),
        ]
    );
}

#[test]
fn add_column_tags_every_row_without_reordering() {
    let t = Table::from_prices([(day(3), 1.0), (day(1), f64::NAN)]);
    let tagged = add_column(&t, "dubai");

    assert_eq!(tagged.len(), 2);
    assert!(tagged.iter().all(|r| r.series_label == "dubai"));
    assert_eq!(tagged.series("dubai"), t);
}

#[test]
fn merge_labeled_keeps_input_order_on_ties() {
    let a = Table::from_prices([(day(0), 1.0)]);
    let b = Table::from_prices([(day(0), 2.0)]);
    let c = Table::from_prices([(day(0), 3.0)]);
    let merged = merge_labeled([(&c, "c"), (&a, "a"), (&b, "b")]);
    assert_eq!(merged.labels(), vec!["c", "a", "b"]);
}

proptest! {
    #[test]
    fn size_and_label_provenance(a in arb_table(), b in arb_table()) {
        let merged = merge(&a, &b, "x", "y");
        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert!(merged.iter().all(|r| r.series_label == "x" || r.series_label == "y"));
        prop_assert_eq!(merged.iter().filter(|r| r.series_label == "x").count(), a.len());
        prop_assert_eq!(merged.iter().filter(|r| r.series_label == "y").count(), b.len());
    }

    #[test]
    fn dates_are_non_decreasing(a in arb_table(), b in arb_table()) {
        let merged = merge(&a, &b, "x", "y");
        prop_assert!(merged.records().windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn each_series_is_recoverable(a in arb_table(), b in arb_table()) {
        let merged = merge(&a, &b, "x", "y");
        prop_assert_eq!(merged.series("x"), stable_sorted(&a));
        prop_assert_eq!(merged.series("y"), stable_sorted(&b));
    }

    #[test]
    fn inputs_are_untouched(a in arb_table(), b in arb_table()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = merge(&a, &b, "x", "y");
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }
}
