//! One-sided (causal) classical decomposition.

use crate::core::{MonthlySeries, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};

/// Result of a one-sided additive decomposition.
///
/// All three components have the same length as the input series. The
/// first `period - 1` entries of `trend` and `residual` are NaN because a
/// trailing window of `period` observations is not yet available there.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Trend component (trailing moving average).
    pub trend: Vec<f64>,
    /// Seasonal component, repeating per calendar month.
    pub seasonal: Vec<f64>,
    /// Residual component (observed - trend - seasonal).
    pub residual: Vec<f64>,
}

/// Decompose a monthly series into trend, seasonal, and residual parts.
///
/// The trend at time t is the mean of the trailing `period` observations
/// ending at t, so no future observation influences any component — the
/// decomposition is safe to use for forecasting without look-ahead leakage.
/// The seasonal component is the per-month mean of the detrended series,
/// centered to sum to zero over one cycle.
///
/// Requires at least two full periods of history.
pub fn decompose(series: &MonthlySeries, period: usize) -> Result<Decomposition> {
    if period < 2 {
        return Err(ForecastError::InvalidParameter(format!(
            "decomposition period must be at least 2, got {period}"
        )));
    }

    let values = series.values();
    let n = values.len();
    if n < 2 * period {
        return Err(ForecastError::InsufficientHistory {
            needed: 2 * period,
            got: n,
        });
    }

    // Trailing moving-average trend; NaN until a full window exists.
    let mut trend = vec![f64::NAN; n];
    let mut window_sum: f64 = values[..period].iter().sum();
    trend[period - 1] = window_sum / period as f64;
    for t in period..n {
        window_sum += values[t] - values[t - period];
        trend[t] = window_sum / period as f64;
    }

    // Per-month means of the detrended series.
    let mut sums = vec![0.0; MONTHS_PER_YEAR];
    let mut counts = vec![0usize; MONTHS_PER_YEAR];
    for t in (period - 1)..n {
        let month = series.month(t).unwrap_or(1) as usize - 1;
        sums[month] += values[t] - trend[t];
        counts[month] += 1;
    }

    let mut month_means = vec![0.0; MONTHS_PER_YEAR];
    for m in 0..MONTHS_PER_YEAR {
        if counts[m] == 0 {
            return Err(ForecastError::Decomposition(format!(
                "no detrended observations for month {}",
                m + 1
            )));
        }
        month_means[m] = sums[m] / counts[m] as f64;
    }

    // Center the seasonal means so they sum to zero over one cycle.
    let grand_mean: f64 = month_means.iter().sum::<f64>() / MONTHS_PER_YEAR as f64;
    for mean in &mut month_means {
        *mean -= grand_mean;
    }

    let mut seasonal = Vec::with_capacity(n);
    let mut residual = Vec::with_capacity(n);
    for t in 0..n {
        let month = series.month(t).unwrap_or(1) as usize - 1;
        seasonal.push(month_means[month]);
        residual.push(values[t] - trend[t] - month_means[month]);
    }

    Ok(Decomposition {
        trend,
        seasonal,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn seasonal_series(months: usize) -> MonthlySeries {
        // Flat base of 100 with +10 every December, starting in January.
        let values: Vec<f64> = (0..months)
            .map(|i| if i % 12 == 11 { 110.0 } else { 100.0 })
            .collect();
        MonthlySeries::from_start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), values).unwrap()
    }

    #[test]
    fn decompose_requires_two_full_periods() {
        let series = seasonal_series(20);
        let result = decompose(&series, 12);
        assert!(matches!(
            result,
            Err(ForecastError::InsufficientHistory { needed: 24, got: 20 })
        ));
    }

    #[test]
    fn decompose_rejects_degenerate_period() {
        let series = seasonal_series(24);
        assert!(matches!(
            decompose(&series, 1),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn components_match_series_length() {
        let series = seasonal_series(36);
        let decomp = decompose(&series, 12).unwrap();
        assert_eq!(decomp.trend.len(), 36);
        assert_eq!(decomp.seasonal.len(), 36);
        assert_eq!(decomp.residual.len(), 36);
    }

    #[test]
    fn trend_head_is_nan_and_tail_is_window_mean() {
        let series = seasonal_series(36);
        let decomp = decompose(&series, 12).unwrap();

        for t in 0..11 {
            assert!(decomp.trend[t].is_nan());
        }
        // Every trailing 12-month window contains exactly one December.
        for t in 11..36 {
            assert_relative_eq!(decomp.trend[t], 100.0 + 10.0 / 12.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn seasonal_component_is_centered() {
        let series = seasonal_series(36);
        let decomp = decompose(&series, 12).unwrap();

        // One cycle of seasonal offsets sums to zero.
        let cycle: f64 = decomp.seasonal[12..24].iter().sum();
        assert_relative_eq!(cycle, 0.0, epsilon = 1e-9);

        // December carries the positive offset.
        assert!(decomp.seasonal[11] > 8.0);
        assert!(decomp.seasonal[0] < 0.0);
    }

    #[test]
    fn residuals_vanish_for_an_exact_seasonal_pattern() {
        let series = seasonal_series(36);
        let decomp = decompose(&series, 12).unwrap();

        for t in 11..36 {
            assert_relative_eq!(decomp.residual[t], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn decomposition_is_one_sided() {
        // Changing a future value must not change earlier components.
        let series_a = seasonal_series(36);
        let mut values_b = series_a.values().to_vec();
        values_b[35] += 50.0;
        let series_b =
            MonthlySeries::from_start(series_a.start().unwrap(), values_b).unwrap();

        let decomp_a = decompose(&series_a, 12).unwrap();
        let decomp_b = decompose(&series_b, 12).unwrap();

        for t in 11..35 {
            assert_relative_eq!(decomp_a.trend[t], decomp_b.trend[t], epsilon = 1e-10);
        }
    }
}
