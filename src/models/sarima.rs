//! Automatic seasonal ARIMA model behind the common forecasting contract.

use log::info;

use crate::core::{Forecast, MonthlySeries};
use crate::engine::{search_order, OrderSearchConfig, Sarima};
use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;

/// Seasonal ARIMA forecaster whose specification is chosen by an AIC grid
/// search at construction.
///
/// Construction runs the search and keeps the winning fitted engine, but
/// the model only reports itself usable after `fit` has been called.
pub struct AutoSarima {
    series: MonthlySeries,
    engine: Sarima,
    fitted: bool,
}

impl AutoSarima {
    /// Search the default specification grid for the series.
    pub fn new(series: MonthlySeries) -> Result<Self> {
        Self::with_config(series, &OrderSearchConfig::default())
    }

    /// Search a caller-supplied specification grid.
    pub fn with_config(series: MonthlySeries, config: &OrderSearchConfig) -> Result<Self> {
        let result = search_order(&series, config)?;
        let order = result.order();
        let seasonal = result.seasonal_order();
        info!(
            "selected SARIMA({},{},{})({},{},{})[{}] aic={:.3}",
            order.p,
            order.d,
            order.q,
            seasonal.p,
            seasonal.d,
            seasonal.q,
            seasonal.period,
            result.aic()
        );
        Ok(Self {
            series,
            engine: result.model,
            fitted: false,
        })
    }

    /// The fitted engine behind the adapter.
    pub fn engine(&self) -> &Sarima {
        &self.engine
    }
}

impl ForecastModel for AutoSarima {
    fn fit(&mut self) -> Result<()> {
        // The grid search already fitted the winner; this confirms it.
        self.fitted = true;
        Ok(())
    }

    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        let values = self.engine.predict(horizon)?;
        let timestamps = self.series.future_timestamps(horizon);
        Ok(Forecast::new(timestamps, values))
    }

    fn mae(&self) -> Result<f64> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        self.engine.mae().ok_or(ForecastError::NotFitted)
    }

    fn name(&self) -> &str {
        "AutoSarima"
    }
}
