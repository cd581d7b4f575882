//! Configuration types shared by the pipeline facade.

use serde::{Deserialize, Serialize};

/// Steps applied by a pipeline run, in the order they execute.
///
/// Date filling already forward-fills the rows it synthesizes, so
/// `forward_fill` only matters when `fill_dates` is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Insert every missing calendar day between the first and last date.
    pub fill_dates: bool,
    /// Carry the last observed price forward into missing prices.
    pub forward_fill: bool,
    /// Trailing window (in rows) of the simple moving average, if any.
    pub moving_average: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fill_dates: true,
            forward_fill: true,
            moving_average: None,
        }
    }
}
