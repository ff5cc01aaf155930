//! Per-month seasonal offsets derived from a decomposition.

use crate::core::{MonthlySeries, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::seasonal::Decomposition;

/// Average seasonal offset for each calendar month.
///
/// Built once from the seasonal component of a decomposition and immutable
/// afterwards. Month 1 is January.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalProfile {
    offsets: [f64; MONTHS_PER_YEAR],
}

impl SeasonalProfile {
    /// Average the seasonal component of `decomposition` by calendar month.
    ///
    /// Every calendar month must occur in the series span; a series of two
    /// full years or more always satisfies this.
    pub fn from_decomposition(
        series: &MonthlySeries,
        decomposition: &Decomposition,
    ) -> Result<Self> {
        if decomposition.seasonal.len() != series.len() {
            return Err(ForecastError::LengthMismatch {
                expected: series.len(),
                got: decomposition.seasonal.len(),
            });
        }

        let mut sums = [0.0; MONTHS_PER_YEAR];
        let mut counts = [0usize; MONTHS_PER_YEAR];
        for (t, &offset) in decomposition.seasonal.iter().enumerate() {
            if !offset.is_finite() {
                continue;
            }
            let month = series.month(t).unwrap_or(1) as usize - 1;
            sums[month] += offset;
            counts[month] += 1;
        }

        let mut offsets = [0.0; MONTHS_PER_YEAR];
        for m in 0..MONTHS_PER_YEAR {
            if counts[m] == 0 {
                return Err(ForecastError::Decomposition(format!(
                    "month {} never occurs in the series span",
                    m + 1
                )));
            }
            offsets[m] = sums[m] / counts[m] as f64;
        }

        Ok(Self { offsets })
    }

    /// Seasonal offset for a calendar month (1..=12).
    pub fn offset(&self, month: u32) -> f64 {
        self.offsets[(month as usize - 1) % MONTHS_PER_YEAR]
    }

    /// All twelve offsets, January first.
    pub fn offsets(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seasonal::decompose;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn seasonal_series() -> MonthlySeries {
        let values: Vec<f64> = (0..36)
            .map(|i| if i % 12 == 11 { 110.0 } else { 100.0 })
            .collect();
        MonthlySeries::from_start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), values).unwrap()
    }

    #[test]
    fn profile_averages_offsets_by_month() {
        let series = seasonal_series();
        let decomp = decompose(&series, 12).unwrap();
        let profile = SeasonalProfile::from_decomposition(&series, &decomp).unwrap();

        assert_relative_eq!(profile.offset(12), 10.0 - 10.0 / 12.0, epsilon = 1e-9);
        for month in 1..=11 {
            assert_relative_eq!(profile.offset(month), -10.0 / 12.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn profile_offsets_sum_to_zero() {
        let series = seasonal_series();
        let decomp = decompose(&series, 12).unwrap();
        let profile = SeasonalProfile::from_decomposition(&series, &decomp).unwrap();

        let total: f64 = profile.offsets().iter().sum();
        assert_relative_eq!(total, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn profile_rejects_mismatched_components() {
        let series = seasonal_series();
        let mut decomp = decompose(&series, 12).unwrap();
        decomp.seasonal.pop();

        assert!(matches!(
            SeasonalProfile::from_decomposition(&series, &decomp),
            Err(ForecastError::LengthMismatch { .. })
        ));
    }
}
