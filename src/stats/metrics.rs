//! Forecast accuracy metrics.

use crate::error::{ForecastError, Result};

/// Mean absolute error between paired actual and predicted values.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.len() != predicted.len() {
        return Err(ForecastError::LengthMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();
    Ok(sum / actual.len() as f64)
}

/// Mean absolute value of a residual series, ignoring undefined entries.
///
/// One-sided decompositions leave NaN residuals at the head of the series;
/// those are skipped rather than poisoning the average.
pub fn mean_absolute_residual(residuals: &[f64]) -> Result<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for r in residuals {
        if r.is_finite() {
            sum += r.abs();
            count += 1;
        }
    }
    if count == 0 {
        return Err(ForecastError::EmptyData);
    }
    Ok(sum / count as f64)
}
