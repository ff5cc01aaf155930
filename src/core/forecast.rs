//! Forecast result structure for holding predictions.

use crate::core::MonthlySeries;
use crate::error::Result;
use chrono::NaiveDate;

/// Point predictions for the months immediately following a series.
///
/// A forecast owns its buffers; it never aliases the history it was
/// produced from, so extending or consuming it cannot corrupt the input
/// series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    timestamps: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl Forecast {
    /// Create a forecast from parallel timestamp and value buffers.
    pub(crate) fn new(timestamps: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(timestamps.len(), values.len());
        Self { timestamps, values }
    }

    /// Create an empty forecast (horizon zero).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// Check if the forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the forecast timestamps.
    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    /// Get the forecast values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over (timestamp, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Convert the forecast into a `MonthlySeries` of its own.
    pub fn into_series(self) -> Result<MonthlySeries> {
        MonthlySeries::new(self.timestamps, self.values)
    }
}
