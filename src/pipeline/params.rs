use std::ops::RangeInclusive;

use crate::error::{GeometryError, Result};
use crate::operations::simplify::DensifyParams;

/// Configuration for a [`super::SimplifyPipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyParams {
    /// Accepted maximum segment lengths for densify commands.
    pub segment_length_range: RangeInclusive<f64>,
    /// Accepted maximum deviations for generalize commands.
    pub deviation_range: RangeInclusive<f64>,
    /// Passed to generalize; drops parts that collapse to a single location.
    pub remove_degenerate_parts: bool,
    /// Densification guard settings.
    pub densify: DensifyParams,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self {
            segment_length_range: 100.0..=500.0,
            deviation_range: 1.0..=250.0,
            remove_degenerate_parts: true,
            densify: DensifyParams::default(),
        }
    }
}

impl SimplifyParams {
    pub(crate) fn check_segment_length(&self, value: f64) -> Result<()> {
        check_range("max_segment_length", value, &self.segment_length_range)
    }

    pub(crate) fn check_deviation(&self, value: f64) -> Result<()> {
        check_range("max_deviation", value, &self.deviation_range)
    }
}

fn check_range(parameter: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(GeometryError::ParameterOutOfRange {
        parameter,
        value,
        min: *range.start(),
        max: *range.end(),
    }
    .into())
}
