//! Seasonal ARIMA model estimation and forecasting.

use crate::core::MonthlySeries;
use crate::engine::diff::{difference, integrate, seasonal_difference, seasonal_integrate};
use crate::engine::optim::{nelder_mead, NelderMeadConfig};
use crate::error::{ForecastError, Result};

/// Non-seasonal (p, d, q) specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// AR order.
    pub p: usize,
    /// Differencing order.
    pub d: usize,
    /// MA order.
    pub q: usize,
}

impl Order {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

/// Seasonal (P, D, Q)[period] specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalOrder {
    /// Seasonal AR order.
    pub p: usize,
    /// Seasonal differencing order.
    pub d: usize,
    /// Seasonal MA order.
    pub q: usize,
    /// Seasonal period.
    pub period: usize,
}

impl SeasonalOrder {
    pub fn new(p: usize, d: usize, q: usize, period: usize) -> Self {
        Self { p, d, q, period }
    }

    /// A specification with no seasonal terms at all.
    pub fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Seasonal ARIMA model fitted by conditional least squares.
///
/// Coefficients are estimated with Nelder-Mead over the conditional sum of
/// squares on the doubly differenced scale; forecasts are integrated back
/// through both differencing passes.
#[derive(Debug, Clone)]
pub struct Sarima {
    order: Order,
    seasonal: SeasonalOrder,
    ar: Vec<f64>,
    ma: Vec<f64>,
    seasonal_ar: Vec<f64>,
    seasonal_ma: Vec<f64>,
    intercept: f64,
    original: Option<Vec<f64>>,
    seasonally_differenced: Option<Vec<f64>>,
    transformed: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
    residual_variance: Option<f64>,
    aic: Option<f64>,
    in_sample_mae: Option<f64>,
}

impl Sarima {
    /// Create an unfitted model with the given specification.
    pub fn new(order: Order, seasonal: SeasonalOrder) -> Self {
        Self {
            order,
            seasonal,
            ar: vec![],
            ma: vec![],
            seasonal_ar: vec![],
            seasonal_ma: vec![],
            intercept: 0.0,
            original: None,
            seasonally_differenced: None,
            transformed: None,
            residuals: None,
            residual_variance: None,
            aic: None,
            in_sample_mae: None,
        }
    }

    /// Non-seasonal specification.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Seasonal specification.
    pub fn seasonal_order(&self) -> SeasonalOrder {
        self.seasonal
    }

    /// AIC of the fit, if fitted.
    pub fn aic(&self) -> Option<f64> {
        self.aic
    }

    /// In-sample mean absolute error over the fit residuals, if fitted.
    pub fn mae(&self) -> Option<f64> {
        self.in_sample_mae
    }

    /// Variance of the fit residuals, if fitted.
    pub fn residual_variance(&self) -> Option<f64> {
        self.residual_variance
    }

    /// Whether `fit` has completed successfully.
    pub fn is_fitted(&self) -> bool {
        self.transformed.is_some()
    }

    /// Number of estimated coefficients (including the intercept).
    fn num_params(&self) -> usize {
        self.order.p + self.order.q + self.seasonal.p + self.seasonal.q + 1
    }

    /// Earliest index on the transformed scale with all lags available.
    fn start_index(&self) -> usize {
        let s = self.seasonal.period;
        self.order
            .p
            .max(self.order.q)
            .max(self.seasonal.p * s)
            .max(self.seasonal.q * s)
    }

    /// Minimum series length the specification can be fitted on.
    pub fn min_observations(&self) -> usize {
        self.order.d + self.seasonal.d * self.seasonal.period + self.start_index() + 5
    }

    /// One-step prediction at index `t` of the transformed series, given
    /// the residuals computed so far.
    #[allow(clippy::too_many_arguments)]
    fn predict_at(
        w: &[f64],
        residuals: &[f64],
        t: usize,
        intercept: f64,
        ar: &[f64],
        ma: &[f64],
        seasonal_ar: &[f64],
        seasonal_ma: &[f64],
        period: usize,
    ) -> f64 {
        let mut pred = intercept;
        for (i, coeff) in ar.iter().enumerate() {
            pred += coeff * (w[t - 1 - i] - intercept);
        }
        for (j, coeff) in seasonal_ar.iter().enumerate() {
            pred += coeff * (w[t - (j + 1) * period] - intercept);
        }
        for (i, coeff) in ma.iter().enumerate() {
            pred += coeff * residuals[t - 1 - i];
        }
        for (j, coeff) in seasonal_ma.iter().enumerate() {
            pred += coeff * residuals[t - (j + 1) * period];
        }
        pred
    }

    /// Conditional sum of squares for a candidate parameter vector.
    fn css(&self, w: &[f64], params: &[f64]) -> f64 {
        let (intercept, ar, ma, sar, sma) = self.split_params(params);
        let start = self.start_index();
        let n = w.len();
        if n <= start {
            return f64::MAX;
        }

        let mut residuals = vec![0.0; n];
        let mut css = 0.0;
        for t in start..n {
            let pred = Self::predict_at(
                w,
                &residuals,
                t,
                intercept,
                ar,
                ma,
                sar,
                sma,
                self.seasonal.period,
            );
            let error = w[t] - pred;
            residuals[t] = error;
            css += error * error;
        }
        css
    }

    fn split_params<'a>(
        &self,
        params: &'a [f64],
    ) -> (f64, &'a [f64], &'a [f64], &'a [f64], &'a [f64]) {
        let p = self.order.p;
        let q = self.order.q;
        let sp = self.seasonal.p;
        let sq = self.seasonal.q;
        let intercept = params[0];
        let ar = &params[1..1 + p];
        let ma = &params[1 + p..1 + p + q];
        let sar = &params[1 + p + q..1 + p + q + sp];
        let sma = &params[1 + p + q + sp..1 + p + q + sp + sq];
        (intercept, ar, ma, sar, sma)
    }

    /// Fit the model to a series by conditional least squares.
    pub fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        let values = series.values();
        let min_len = self.min_observations();
        if values.len() < min_len {
            return Err(ForecastError::InsufficientHistory {
                needed: min_len,
                got: values.len(),
            });
        }

        let sdiff = seasonal_difference(values, self.seasonal.d, self.seasonal.period);
        let w = difference(&sdiff, self.order.d);
        let start = self.start_index();
        if w.len() <= start + 2 {
            return Err(ForecastError::InsufficientHistory {
                needed: min_len,
                got: values.len(),
            });
        }

        // Initial guess: intercept at the transformed mean, small coefficients.
        let mean = w.iter().sum::<f64>() / w.len() as f64;
        let n_params = self.num_params();
        let mut initial = vec![0.0; n_params];
        initial[0] = mean;
        for (i, value) in initial.iter_mut().enumerate().skip(1) {
            *value = 0.1 / i as f64;
        }

        let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
        bounds.extend(std::iter::repeat((-0.99, 0.99)).take(n_params - 1));

        let config = NelderMeadConfig {
            max_iter: 1000,
            tolerance: 1e-8,
            ..Default::default()
        };
        let result = nelder_mead(|params| self.css(&w, params), &initial, Some(&bounds), config);

        if !result.optimal_value.is_finite() {
            return Err(ForecastError::Computation(
                "conditional least squares did not produce a finite objective".to_string(),
            ));
        }

        let (intercept, ar, ma, sar, sma) = self.split_params(&result.optimal_point);
        self.intercept = intercept;
        self.ar = ar.to_vec();
        self.ma = ma.to_vec();
        self.seasonal_ar = sar.to_vec();
        self.seasonal_ma = sma.to_vec();

        // Residuals, variance, AIC, in-sample MAE on the transformed scale.
        let n = w.len();
        let mut residuals = vec![0.0; n];
        for t in start..n {
            let pred = Self::predict_at(
                &w,
                &residuals,
                t,
                self.intercept,
                &self.ar,
                &self.ma,
                &self.seasonal_ar,
                &self.seasonal_ma,
                self.seasonal.period,
            );
            residuals[t] = w[t] - pred;
        }

        let n_eff = (n - start) as f64;
        let variance = residuals[start..].iter().map(|r| r * r).sum::<f64>() / n_eff;
        let mae = residuals[start..].iter().map(|r| r.abs()).sum::<f64>() / n_eff;

        let k = self.num_params() as f64;
        // Floor the variance so a perfect in-sample fit still yields a
        // finite, comparable AIC.
        let ll_variance = variance.max(1e-10);
        let log_likelihood =
            -0.5 * n_eff * (1.0 + ll_variance.ln() + (2.0 * std::f64::consts::PI).ln());
        self.aic = Some(-2.0 * log_likelihood + 2.0 * k);

        self.residual_variance = Some(variance);
        self.in_sample_mae = Some(mae);
        self.residuals = Some(residuals);
        self.original = Some(values.to_vec());
        self.seasonally_differenced = Some(sdiff);
        self.transformed = Some(w);

        Ok(())
    }

    /// Forecast `horizon` values past the end of the fitted series.
    pub fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let original = self.original.as_ref().ok_or(ForecastError::NotFitted)?;
        let sdiff = self
            .seasonally_differenced
            .as_ref()
            .ok_or(ForecastError::NotFitted)?;
        let w = self.transformed.as_ref().ok_or(ForecastError::NotFitted)?;
        let residuals = self.residuals.as_ref().ok_or(ForecastError::NotFitted)?;

        if horizon == 0 {
            return Ok(Vec::new());
        }

        // Recursive forecast on the transformed scale; future shocks are zero.
        let mut extended = w.clone();
        let mut extended_residuals = residuals.clone();
        for _ in 0..horizon {
            let t = extended.len();
            let pred = Self::predict_at(
                &extended,
                &extended_residuals,
                t,
                self.intercept,
                &self.ar,
                &self.ma,
                &self.seasonal_ar,
                &self.seasonal_ma,
                self.seasonal.period,
            );
            extended.push(pred);
            extended_residuals.push(0.0);
        }
        let forecast_w: Vec<f64> = extended[w.len()..].to_vec();

        // Undo non-seasonal differencing against the seasonally differenced
        // history, then seasonal differencing against the original.
        let restored = integrate(&forecast_w, sdiff, self.order.d);
        let predictions =
            seasonal_integrate(&restored, original, self.seasonal.d, self.seasonal.period);

        Ok(predictions)
    }
}
