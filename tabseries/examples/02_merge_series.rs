mod common;
use chrono::NaiveDate;
use tabseries::{Pipeline, PipelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let start = NaiveDate::from_ymd_opt(2020, 4, 13).ok_or("invalid start date")?;
    let brent = common::sparse_series(start, &[Some(31.7), Some(28.7), None, Some(28.0)]);
    let wti = common::sparse_series(start, &[Some(22.4), None, Some(19.9), Some(19.9)]);

    // Configuration can come from anywhere serde can read.
    let cfg: PipelineConfig = serde_json::from_str(r#"{"fill_dates": true, "moving_average": 2}"#)?;
    let pipeline = Pipeline::builder().config(cfg).build()?;

    let merged = pipeline.run_merged(&brent, &wti, "brent", "wti")?;
    println!("## Merged ({} rows, labels {:?})", merged.len(), merged.labels());
    for r in &merged {
        println!("  {}  {:<6} {:?}", r.date, r.series_label, r.price);
    }

    println!("\n{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}
