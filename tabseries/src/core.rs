use tabseries_core::{
    LabeledTable, PipelineConfig, TabError, Table, fill_dates, fill_missing_values, merge,
    simple_moving_average,
};

/// Validated chain of table operations.
///
/// A pipeline is immutable once built and can be reused across any number of
/// tables; every run borrows its input and returns a new table.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub(crate) cfg: PipelineConfig,
}

/// Builder for constructing a [`Pipeline`] with custom configuration.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    cfg: PipelineConfig,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: fill missing calendar dates, forward-fill missing prices,
    /// no moving average.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: PipelineConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub const fn config(mut self, cfg: PipelineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Toggle insertion of missing calendar dates.
    ///
    /// Behavior and trade-offs:
    /// - Produces one row per calendar day, weekends and holidays included.
    ///   Inserted days repeat the previous price, which flattens the series
    ///   over non-trading days.
    /// - Requires a non-empty table; runs on empty tables fail.
    #[must_use]
    pub const fn fill_dates(mut self, yes: bool) -> Self {
        self.cfg.fill_dates = yes;
        self
    }

    /// Toggle forward filling of missing prices.
    ///
    /// Only has an effect when date filling is off, since date filling
    /// forward-fills on its own.
    #[must_use]
    pub const fn forward_fill(mut self, yes: bool) -> Self {
        self.cfg.forward_fill = yes;
        self
    }

    /// Append a trailing simple moving average over `window_size` rows.
    ///
    /// The first `window_size - 1` rows of the output are dropped, as are
    /// windows that still contain a missing price.
    #[must_use]
    pub const fn moving_average(mut self, window_size: usize) -> Self {
        self.cfg.moving_average = Some(window_size);
        self
    }

    /// Build the pipeline.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a moving average with a zero window was requested.
    pub fn build(self) -> Result<Pipeline, TabError> {
        if self.cfg.moving_average == Some(0) {
            return Err(TabError::invalid_arg(
                "moving average window must be positive",
            ));
        }
        Ok(Pipeline { cfg: self.cfg })
    }
}

impl Pipeline {
    /// Start building a new `Pipeline`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tabseries::{Pipeline, Table};
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
    /// let pipeline = Pipeline::builder().moving_average(2).build().unwrap();
    /// let t = Table::from_prices([(d(1), 1.0), (d(3), 3.0)]);
    /// let out = pipeline.run(&t).unwrap();
    /// assert_eq!(out.prices(), vec![Some(1.0), Some(2.0)]);
    /// ```
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The effective configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.cfg
    }

    /// Run the configured steps over one table.
    ///
    /// Order: date filling (or plain forward filling), then the moving average.
    ///
    /// # Errors
    /// - `InvalidInput` if date filling is enabled and the table is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tabseries::pipeline::run",
            skip(self, table),
            fields(
                rows = table.len(),
                fill_dates = self.cfg.fill_dates,
                forward_fill = self.cfg.forward_fill,
                moving_average = ?self.cfg.moving_average,
            ),
        )
    )]
    pub fn run(&self, table: &Table) -> Result<Table, TabError> {
        let filled = if self.cfg.fill_dates {
            fill_dates(table)?
        } else if self.cfg.forward_fill {
            fill_missing_values(table)
        } else {
            table.clone()
        };

        match self.cfg.moving_average {
            Some(n) => simple_moving_average(&filled, n),
            None => Ok(filled),
        }
    }

    /// Run both tables through the pipeline, then merge them into one
    /// long-format table labeled by origin.
    ///
    /// # Errors
    /// Fails if either run fails; no partial result is returned.
    pub fn run_merged(
        &self,
        table_one: &Table,
        table_two: &Table,
        label_one: impl Into<String>,
        label_two: impl Into<String>,
    ) -> Result<LabeledTable, TabError> {
        let one = self.run(table_one)?;
        let two = self.run(table_two)?;
        Ok(merge(&one, &two, label_one, label_two))
    }
}
