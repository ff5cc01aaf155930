//! Differencing and integration helpers for SARIMA models.

/// Apply `d` rounds of first differencing.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() <= 1 {
            break;
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Apply `d` rounds of seasonal differencing at the given period.
pub fn seasonal_difference(series: &[f64], d: usize, period: usize) -> Vec<f64> {
    if period == 0 {
        return series.to_vec();
    }
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() <= period {
            break;
        }
        result = result
            .iter()
            .skip(period)
            .zip(result.iter())
            .map(|(curr, prev)| curr - prev)
            .collect();
    }
    result
}

/// Undo `d` rounds of first differencing on a forecast.
///
/// `original` is the series the differencing was applied to; its tail
/// supplies the integration constants at each level.
pub fn integrate(forecast: &[f64], original: &[f64], d: usize) -> Vec<f64> {
    if d == 0 || forecast.is_empty() {
        return forecast.to_vec();
    }

    let mut result = forecast.to_vec();
    for level in (0..d).rev() {
        let base = difference(original, level);
        let mut cumsum = base.last().copied().unwrap_or(0.0);
        for value in &mut result {
            cumsum += *value;
            *value = cumsum;
        }
    }
    result
}

/// Undo `d` rounds of seasonal differencing on a forecast.
///
/// Each forecast point is restored by adding the value one period earlier,
/// taken from the original history or from already restored forecasts once
/// the horizon exceeds one period.
pub fn seasonal_integrate(forecast: &[f64], original: &[f64], d: usize, period: usize) -> Vec<f64> {
    if d == 0 || period == 0 || forecast.is_empty() {
        return forecast.to_vec();
    }

    let mut result = forecast.to_vec();
    for level in (0..d).rev() {
        let mut extended = seasonal_difference(original, level, period);
        let mut integrated = Vec::with_capacity(result.len());
        for &value in &result {
            let restored = match extended.len().checked_sub(period) {
                Some(idx) => value + extended[idx],
                None => value,
            };
            integrated.push(restored);
            extended.push(restored);
        }
        result = integrated;
    }
    result
}

/// Suggest a non-seasonal differencing order via a variance-ratio heuristic.
///
/// Differencing is applied while it shrinks the variance markedly, up to
/// `max_d` rounds.
pub fn suggest_differencing(series: &[f64], max_d: usize) -> usize {
    let mut current = series.to_vec();
    let mut d = 0;
    while d < max_d {
        let next = difference(&current, 1);
        if next.len() < 3 {
            break;
        }
        if variance(&next) < 0.8 * variance(&current) {
            current = next;
            d += 1;
        } else {
            break;
        }
    }
    d
}

/// Suggest a seasonal differencing order (0 or 1) for the given period.
///
/// Returns 1 when seasonal differencing reduces the variance well below the
/// original, which indicates a stable seasonal pattern.
pub fn suggest_seasonal_differencing(series: &[f64], period: usize) -> usize {
    if period < 2 || series.len() < 2 * period {
        return 0;
    }
    let diffed = seasonal_difference(series, 1, period);
    if variance(&diffed) < 0.7 * variance(series) {
        1
    } else {
        0
    }
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn difference_and_integrate_round_trip() {
        let series = vec![1.0, 3.0, 6.0, 10.0, 15.0];
        let diffed = difference(&series, 1);
        assert_eq!(diffed, vec![2.0, 3.0, 4.0, 5.0]);

        // Integrating a "forecast" continues from the original tail.
        let restored = integrate(&[6.0, 7.0], &series, 1);
        assert_eq!(restored, vec![21.0, 28.0]);
    }

    #[test]
    fn second_order_differencing() {
        let series = vec![1.0, 4.0, 9.0, 16.0, 25.0];
        let diffed = difference(&series, 2);
        assert_eq!(diffed, vec![2.0, 2.0, 2.0]);

        let restored = integrate(&[2.0, 2.0], &series, 2);
        assert_eq!(restored, vec![36.0, 49.0]);
    }

    #[test]
    fn seasonal_difference_removes_a_repeating_pattern() {
        let series: Vec<f64> = (0..12).map(|i| (i % 4) as f64 * 10.0).collect();
        let diffed = seasonal_difference(&series, 1, 4);
        assert_eq!(diffed.len(), 8);
        assert!(diffed.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn seasonal_integrate_restores_the_pattern() {
        let series: Vec<f64> = (0..12).map(|i| (i % 4) as f64 * 10.0).collect();
        // A zero forecast on the seasonally differenced scale means the
        // pattern repeats unchanged.
        let restored = seasonal_integrate(&[0.0; 6], &series, 1, 4);
        let expected: Vec<f64> = (12..18).map(|i| (i % 4) as f64 * 10.0).collect();
        for (r, e) in restored.iter().zip(expected.iter()) {
            assert_relative_eq!(r, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn suggest_differencing_detects_a_trend() {
        let trending: Vec<f64> = (0..40).map(|i| 2.0 * i as f64).collect();
        assert!(suggest_differencing(&trending, 2) >= 1);

        // Noise-like data: differencing inflates the variance, so d stays 0.
        let noisy: Vec<f64> = (0..40u64)
            .map(|i| (i.wrapping_mul(2654435761) % 1000) as f64 / 100.0)
            .collect();
        assert_eq!(suggest_differencing(&noisy, 2), 0);
    }

    #[test]
    fn suggest_seasonal_differencing_detects_seasonality() {
        let seasonal: Vec<f64> = (0..48)
            .map(|i| 100.0 + 20.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
            .collect();
        assert_eq!(suggest_seasonal_differencing(&seasonal, 12), 1);

        let flat: Vec<f64> = (0..48).map(|i| (i as f64 * 1.3).sin()).collect();
        assert_eq!(suggest_seasonal_differencing(&flat, 12), 0);
    }

    #[test]
    fn zero_order_operations_are_identity() {
        let series = vec![1.0, 2.0, 3.0];
        assert_eq!(difference(&series, 0), series);
        assert_eq!(seasonal_difference(&series, 0, 12), series);
        assert_eq!(integrate(&series, &series, 0), series);
        assert_eq!(seasonal_integrate(&series, &series, 0, 12), series);
    }
}
