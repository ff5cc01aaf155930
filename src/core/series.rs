//! MonthlySeries data structure for monthly-sampled univariate data.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};

/// Number of periods in one seasonal cycle for monthly data.
pub const MONTHS_PER_YEAR: usize = 12;

/// Return the first day of the month following `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of any month is always representable.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// A univariate time series sampled at monthly frequency.
///
/// Timestamps are first-of-month dates, strictly increasing with no gaps;
/// values are finite floats. Both invariants are enforced at construction,
/// so downstream code can assume a clean, regularly spaced series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    timestamps: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Create a series from explicit timestamps and values.
    ///
    /// Timestamps must be first-of-month dates forming consecutive calendar
    /// months; values must be finite.
    pub fn new(timestamps: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::LengthMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        for (i, date) in timestamps.iter().enumerate() {
            if date.day() != 1 {
                return Err(ForecastError::Timestamp(format!(
                    "{date} is not a first-of-month date"
                )));
            }
            if i > 0 && *date != next_month(timestamps[i - 1]) {
                return Err(ForecastError::Timestamp(format!(
                    "{} does not follow {} by one month",
                    date,
                    timestamps[i - 1]
                )));
            }
        }

        for (i, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "non-finite value at index {i}"
                )));
            }
        }

        Ok(Self { timestamps, values })
    }

    /// Create a series of consecutive months starting at `start`.
    pub fn from_start(start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        let mut timestamps = Vec::with_capacity(values.len());
        let mut date = start;
        for _ in 0..values.len() {
            timestamps.push(date);
            date = next_month(date);
        }
        Self::new(timestamps, values)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the timestamps.
    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    /// Get the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// First timestamp, if any.
    pub fn start(&self) -> Option<NaiveDate> {
        self.timestamps.first().copied()
    }

    /// Last timestamp, if any.
    pub fn last_timestamp(&self) -> Option<NaiveDate> {
        self.timestamps.last().copied()
    }

    /// Calendar month (1..=12) of the observation at `index`.
    pub fn month(&self, index: usize) -> Option<u32> {
        self.timestamps.get(index).map(|d| d.month())
    }

    /// Iterate over (timestamp, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Timestamps of the `horizon` months immediately following the series.
    ///
    /// Empty when the series itself is empty.
    pub fn future_timestamps(&self, horizon: usize) -> Vec<NaiveDate> {
        let Some(mut date) = self.last_timestamp() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            date = next_month(date);
            out.push(date);
        }
        out
    }
}
