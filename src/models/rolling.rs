//! Seasonal rolling-average forecaster.

use crate::core::{Forecast, MonthlySeries, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;
use crate::seasonal::{decompose, SeasonalProfile};
use crate::stats::mean_absolute_residual;

/// Forecasts by projecting a trailing twelve-month average forward and
/// re-applying a monthly seasonal profile extracted from a one-sided
/// classical decomposition.
///
/// All estimation happens at construction; `fit` is a no-op confirmation.
#[derive(Debug, Clone)]
pub struct RollingAverage {
    series: MonthlySeries,
    profile: SeasonalProfile,
    residuals: Vec<f64>,
}

impl RollingAverage {
    /// Decompose the series and extract its seasonal profile.
    ///
    /// Requires at least twelve observations outright and twenty-four for
    /// the decomposition behind the profile.
    pub fn new(series: MonthlySeries) -> Result<Self> {
        if series.len() < MONTHS_PER_YEAR {
            return Err(ForecastError::InsufficientHistory {
                needed: MONTHS_PER_YEAR,
                got: series.len(),
            });
        }
        let decomposition = decompose(&series, MONTHS_PER_YEAR)
            .map_err(|e| ForecastError::Decomposition(e.to_string()))?;
        let profile = SeasonalProfile::from_decomposition(&series, &decomposition)?;
        let residuals = decomposition.residual;
        Ok(Self {
            series,
            profile,
            residuals,
        })
    }

    /// The seasonal profile the forecasts are built on.
    pub fn profile(&self) -> &SeasonalProfile {
        &self.profile
    }
}

impl ForecastModel for RollingAverage {
    fn fit(&mut self) -> Result<()> {
        // Estimation already happened in the constructor.
        Ok(())
    }

    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        if horizon == 0 {
            return Ok(Forecast::empty());
        }

        let timestamps = self.series.future_timestamps(horizon);
        let n = self.series.len();
        let mut window: Vec<f64> = self.series.values()[n - MONTHS_PER_YEAR..].to_vec();
        let mut values = Vec::with_capacity(horizon);

        for date in &timestamps {
            let start = window.len() - MONTHS_PER_YEAR;
            let trend = window[start..].iter().sum::<f64>() / MONTHS_PER_YEAR as f64;
            let value = trend + self.profile.offset(chrono::Datelike::month(date));
            window.push(value);
            values.push(value);
        }

        Ok(Forecast::new(timestamps, values))
    }

    fn mae(&self) -> Result<f64> {
        mean_absolute_residual(&self.residuals)
    }

    fn name(&self) -> &str {
        "RollingAverage"
    }
}
