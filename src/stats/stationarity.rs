//! Augmented Dickey-Fuller stationarity test.

use crate::error::{ForecastError, Result};

/// Outcome of an ADF test with a constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct StationarityResult {
    /// t-statistic on the lagged level coefficient.
    pub statistic: f64,
    /// Approximate p-value from tabulated critical values.
    pub p_value: f64,
    /// Whether the unit-root hypothesis is rejected at the 5% level.
    pub is_stationary: bool,
    /// Number of augmenting lag differences included.
    pub lags: usize,
}

/// Critical values for the constant-only ADF regression (1%, 5%, 10%).
const CRITICAL_VALUES: [f64; 3] = [-3.43, -2.86, -2.57];

/// Run an ADF test with automatic lag selection.
///
/// The regression is `Δy_t = a + b·y_{t-1} + Σ c_i·Δy_{t-i} + e_t` with the
/// Schwert rule for the lag count; the reported statistic is the t-value
/// on `b`.
pub fn adf_test(series: &[f64]) -> Result<StationarityResult> {
    let n = series.len();
    if n < 10 {
        return Err(ForecastError::InsufficientHistory { needed: 10, got: n });
    }

    let max_lags = (12.0 * (n as f64 / 100.0).powf(0.25)).floor() as usize;
    let lags = max_lags.min(n / 2 - 2);

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let rows = diff.len() - lags;
    let cols = lags + 2;
    if rows <= cols {
        return Err(ForecastError::Computation(
            "not enough observations for the lag order".to_string(),
        ));
    }

    // Design matrix: constant, lagged level, lagged differences.
    let mut x = vec![vec![0.0; cols]; rows];
    let mut y = vec![0.0; rows];
    for t in 0..rows {
        let idx = t + lags;
        y[t] = diff[idx];
        x[t][0] = 1.0;
        x[t][1] = series[idx];
        for lag in 1..=lags {
            x[t][1 + lag] = diff[idx - lag];
        }
    }

    let (beta, xtx_inv) = ols(&x, &y)?;

    let residual_ss: f64 = (0..rows)
        .map(|t| {
            let fitted: f64 = (0..cols).map(|j| x[t][j] * beta[j]).sum();
            let e = y[t] - fitted;
            e * e
        })
        .sum();
    let sigma2 = residual_ss / (rows - cols) as f64;
    let se = (sigma2 * xtx_inv[1][1]).sqrt();
    if se == 0.0 || !se.is_finite() {
        return Err(ForecastError::Computation(
            "degenerate regression in stationarity test".to_string(),
        ));
    }
    let statistic = beta[1] / se;

    let p_value = approximate_p_value(statistic);
    Ok(StationarityResult {
        statistic,
        p_value,
        is_stationary: statistic < CRITICAL_VALUES[1],
        lags,
    })
}

fn approximate_p_value(statistic: f64) -> f64 {
    if statistic < CRITICAL_VALUES[0] {
        0.005
    } else if statistic < CRITICAL_VALUES[1] {
        0.03
    } else if statistic < CRITICAL_VALUES[2] {
        0.075
    } else if statistic < -1.94 {
        0.2
    } else if statistic < -0.62 {
        0.5
    } else {
        0.9
    }
}

/// Least squares via the normal equations, returning the coefficient
/// vector and the inverse Gram matrix.
fn ols(x: &[Vec<f64>], y: &[f64]) -> Result<(Vec<f64>, Vec<Vec<f64>>)> {
    let rows = x.len();
    let cols = x[0].len();

    let mut xtx = vec![vec![0.0; cols]; cols];
    let mut xty = vec![0.0; cols];
    for t in 0..rows {
        for i in 0..cols {
            xty[i] += x[t][i] * y[t];
            for j in 0..cols {
                xtx[i][j] += x[t][i] * x[t][j];
            }
        }
    }

    let inv = invert(&xtx).ok_or_else(|| {
        ForecastError::Computation("singular design matrix in stationarity test".to_string())
    })?;
    let beta: Vec<f64> = (0..cols)
        .map(|i| (0..cols).map(|j| inv[i][j] * xty[j]).sum())
        .collect();
    Ok((beta, inv))
}

/// Gauss-Jordan inversion; returns None for singular input.
fn invert(matrix: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = matrix.len();
    let mut aug: Vec<Vec<f64>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut extended = row.clone();
            extended.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            extended
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n).max_by(|&a, &b| {
            aug[a][col]
                .abs()
                .partial_cmp(&aug[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if aug[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        aug.swap(col, pivot_row);

        let pivot = aug[col][col];
        for value in aug[col].iter_mut() {
            *value /= pivot;
        }
        let normalized = aug[col].clone();
        for (row, current) in aug.iter_mut().enumerate() {
            if row != col {
                let factor = current[col];
                for (value, p) in current.iter_mut().zip(&normalized) {
                    *value -= factor * p;
                }
            }
        }
    }

    Some(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}
