use chrono::NaiveDate;
use tabseries_types::{LabeledTable, Record, TabError, Table};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, day).unwrap()
}

#[test]
fn table_serializes_as_record_sequence() {
    let t = Table::new(vec![Record::new(d(1), 5.0), Record::missing(d(2))]);

    let json = serde_json::to_value(&t).expect("serialize table");
    assert_eq!(
        json,
        serde_json::json!([
            {"date": "2020-01-01", "price": 5.0},
            {"date": "2020-01-02", "price": null},
        ])
    );

    let de: Table = serde_json::from_value(json).expect("deserialize table");
    assert_eq!(de, t);
}

#[test]
fn labeled_table_roundtrip_and_split() {
    let lt: LabeledTable = vec![
        Record::new(d(1), 1.0).labeled("brent"),
        Record::new(d(1), 2.0).labeled("wti"),
        Record::new(d(2), 3.0).labeled("brent"),
    ]
    .into();

    let json = serde_json::to_string(&lt).expect("serialize labeled table");
    let de: LabeledTable = serde_json::from_str(&json).expect("deserialize labeled table");
    assert_eq!(de, lt);

    assert_eq!(de.labels(), vec!["brent", "wti"]);
    assert_eq!(de.series("brent").prices(), vec![Some(1.0), Some(3.0)]);
    assert!(de.series("dubai").is_empty());
}

#[test]
fn date_range_and_ordering_helpers() {
    let t = Table::from_prices([(d(5), 1.0), (d(2), f64::NAN), (d(9), 3.0)]);

    assert_eq!(t.date_range(), Some((d(2), d(9))));
    assert!(!t.is_sorted_by_date());
    assert_eq!(t.missing_count(), 1);
    assert_eq!(Table::default().date_range(), None);
}

#[test]
fn error_roundtrip() {
    let err = TabError::invalid_arg("window_size must be positive");
    let json = serde_json::to_string(&err).expect("serialize error");
    let de: TabError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, err);
    assert!(!de.is_input());
    assert!(TabError::invalid_input("empty").is_input());
}
