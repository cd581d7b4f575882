mod common;
#[cfg(feature = "dataframe")]
use chrono::NaiveDate;
#[cfg(feature = "dataframe")]
use tabseries::{ToDataFrame, merge, table_from_dataframe};

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let start = NaiveDate::from_ymd_opt(2020, 1, 1).ok_or("invalid start date")?;
    let a = common::sparse_series(start, &[Some(10.0), Some(11.0)]);
    let b = common::sparse_series(start, &[None, Some(20.0)]);

    let df = merge(&a, &b, "x", "y").to_dataframe()?;
    println!(
        "DataFrame shape: {} rows x {} cols",
        df.height(),
        df.width()
    );

    let back = table_from_dataframe(&a.to_dataframe()?)?;
    println!("Round-tripped {} rows", back.len());
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    common::init_tracing();
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
