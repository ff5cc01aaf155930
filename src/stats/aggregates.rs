//! Calendar-bucketed summaries of a monthly series.

use chrono::Datelike;

use crate::core::{MonthlySeries, MONTHS_PER_YEAR};

/// Average value per calendar month (index 0 = January).
///
/// Months never observed report NaN.
pub fn monthly_means(series: &MonthlySeries) -> [f64; MONTHS_PER_YEAR] {
    let mut sums = [0.0; MONTHS_PER_YEAR];
    let mut counts = [0usize; MONTHS_PER_YEAR];
    for (date, value) in series.iter() {
        let idx = (date.month() - 1) as usize;
        sums[idx] += value;
        counts[idx] += 1;
    }
    let mut means = [f64::NAN; MONTHS_PER_YEAR];
    for idx in 0..MONTHS_PER_YEAR {
        if counts[idx] > 0 {
            means[idx] = sums[idx] / counts[idx] as f64;
        }
    }
    means
}

/// Average value per calendar year, in chronological order.
pub fn yearly_means(series: &MonthlySeries) -> Vec<(i32, f64)> {
    let mut result: Vec<(i32, f64, usize)> = Vec::new();
    for (date, value) in series.iter() {
        let year = date.year();
        match result.last_mut() {
            Some((y, sum, count)) if *y == year => {
                *sum += value;
                *count += 1;
            }
            _ => result.push((year, value, 1)),
        }
    }
    result
        .into_iter()
        .map(|(year, sum, count)| (year, sum / count as f64))
        .collect()
}
