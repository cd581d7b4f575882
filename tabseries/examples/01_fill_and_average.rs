mod common;
use chrono::NaiveDate;
use tabseries::{Pipeline, fill_dates};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    // 1. A week of closes with two missing trading days.
    let start = NaiveDate::from_ymd_opt(2020, 3, 2).ok_or("invalid start date")?;
    let brent = common::sparse_series(
        start,
        &[Some(51.9), Some(53.3), None, Some(49.9), None, Some(45.3), Some(45.3)],
    );
    println!("Input ({} rows):", brent.len());
    for r in &brent {
        println!("  {}  {:?}", r.date, r.price);
    }

    // 2. Fill the calendar gaps on their own.
    let filled = fill_dates(&brent)?;
    println!("\nFilled ({} rows):", filled.len());
    for r in &filled {
        println!("  {}  {:?}", r.date, r.price);
    }

    // 3. Same thing plus a 3-day moving average through a pipeline.
    let pipeline = Pipeline::builder().moving_average(3).build()?;
    let sma = pipeline.run(&brent)?;
    println!("\n3-day SMA ({} rows):", sma.len());
    for r in &sma {
        println!("  {}  {:.3}", r.date, r.price.unwrap_or(f64::NAN));
    }

    Ok(())
}
