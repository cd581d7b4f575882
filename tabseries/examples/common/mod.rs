use chrono::{Days, NaiveDate};
use tabseries::Table;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

#[allow(dead_code)]
/// Daily series starting at `start`; `None` entries become absent dates so
/// the demos have gaps to fill.
#[must_use]
pub fn sparse_series(start: NaiveDate, prices: &[Option<f64>]) -> Table {
    Table::from_prices(prices.iter().enumerate().filter_map(|(i, p)| {
        let date = start.checked_add_days(Days::new(u64::try_from(i).ok()?))?;
        p.map(|price| (date, price))
    }))
}
