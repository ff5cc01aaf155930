//! Grid search over SARIMA specifications scored by AIC.

use log::debug;

use crate::core::MonthlySeries;
use crate::engine::diff::{suggest_differencing, suggest_seasonal_differencing};
use crate::engine::sarima::{Order, Sarima, SeasonalOrder};
use crate::error::{ForecastError, Result};

/// Bounds for the specification grid.
#[derive(Debug, Clone)]
pub struct OrderSearchConfig {
    /// Maximum AR order.
    pub max_p: usize,
    /// Maximum MA order.
    pub max_q: usize,
    /// Maximum seasonal AR order.
    pub max_seasonal_p: usize,
    /// Maximum seasonal MA order.
    pub max_seasonal_q: usize,
    /// Seasonal period.
    pub seasonal_period: usize,
    /// Maximum non-seasonal differencing order.
    pub max_d: usize,
    /// Maximum seasonal differencing order.
    pub max_seasonal_d: usize,
}

impl Default for OrderSearchConfig {
    fn default() -> Self {
        Self {
            max_p: 3,
            max_q: 3,
            max_seasonal_p: 1,
            max_seasonal_q: 1,
            seasonal_period: 12,
            max_d: 2,
            max_seasonal_d: 1,
        }
    }
}

/// Outcome of a grid search: the winning fitted model and the scores of
/// every candidate that fitted successfully.
#[derive(Debug, Clone)]
pub struct OrderSearchResult {
    /// The best-scoring fitted model.
    pub model: Sarima,
    /// (order, seasonal order, AIC) for every candidate that converged.
    pub scores: Vec<(Order, SeasonalOrder, f64)>,
}

impl OrderSearchResult {
    pub fn order(&self) -> Order {
        self.model.order()
    }

    pub fn seasonal_order(&self) -> SeasonalOrder {
        self.model.seasonal_order()
    }

    pub fn aic(&self) -> f64 {
        // The winner is always fitted.
        self.model.aic().unwrap_or(f64::INFINITY)
    }
}

/// Fit every specification in the grid and keep the lowest-AIC model.
///
/// Differencing orders are fixed up front from variance-reduction
/// heuristics rather than searched, which keeps all candidate AICs on a
/// comparable scale. Candidates that fail to fit are skipped; if none
/// converge the search fails.
pub fn search_order(series: &MonthlySeries, config: &OrderSearchConfig) -> Result<OrderSearchResult> {
    let period = config.seasonal_period;
    if period < 2 {
        return Err(ForecastError::InvalidParameter(format!(
            "seasonal period must be at least 2, got {period}"
        )));
    }
    if series.len() < 2 * period {
        return Err(ForecastError::OrderSearch(format!(
            "need at least {} observations for a period-{} search, got {}",
            2 * period,
            period,
            series.len()
        )));
    }

    let d = suggest_differencing(series.values(), config.max_d);
    let seasonal_d = suggest_seasonal_differencing(series.values(), period).min(config.max_seasonal_d);
    debug!("order search: d={d}, D={seasonal_d}, period={period}");

    let mut best: Option<Sarima> = None;
    let mut best_aic = f64::INFINITY;
    let mut scores = Vec::new();

    for p in 0..=config.max_p {
        for q in 0..=config.max_q {
            for sp in 0..=config.max_seasonal_p {
                for sq in 0..=config.max_seasonal_q {
                    let order = Order::new(p, d, q);
                    let seasonal = SeasonalOrder::new(sp, seasonal_d, sq, period);
                    let mut candidate = Sarima::new(order, seasonal);
                    match candidate.fit(series) {
                        Ok(()) => {
                            let aic = candidate.aic().unwrap_or(f64::INFINITY);
                            debug!(
                                "SARIMA({p},{d},{q})({sp},{seasonal_d},{sq})[{period}] aic={aic:.3}"
                            );
                            scores.push((order, seasonal, aic));
                            if aic < best_aic {
                                best_aic = aic;
                                best = Some(candidate);
                            }
                        }
                        Err(err) => {
                            debug!(
                                "SARIMA({p},{d},{q})({sp},{seasonal_d},{sq})[{period}] failed: {err}"
                            );
                        }
                    }
                }
            }
        }
    }

    match best {
        Some(model) => Ok(OrderSearchResult { model, scores }),
        None => Err(ForecastError::OrderSearch(
            "no candidate model converged".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_series(values: Vec<f64>) -> MonthlySeries {
        MonthlySeries::from_start(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(), values).unwrap()
    }

    fn seasonal_values(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                200.0
                    + 0.4 * i as f64
                    + 20.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin()
            })
            .collect()
    }

    #[test]
    fn finds_a_model_for_seasonal_data() {
        let series = make_series(seasonal_values(72));
        let config = OrderSearchConfig {
            max_p: 1,
            max_q: 1,
            ..Default::default()
        };
        let result = search_order(&series, &config).unwrap();
        assert!(result.model.is_fitted());
        assert!(result.aic().is_finite());
        assert!(!result.scores.is_empty());
    }

    #[test]
    fn winner_has_the_lowest_recorded_aic() {
        let series = make_series(seasonal_values(60));
        let config = OrderSearchConfig {
            max_p: 2,
            max_q: 1,
            ..Default::default()
        };
        let result = search_order(&series, &config).unwrap();
        let min_score = result
            .scores
            .iter()
            .map(|(_, _, aic)| *aic)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.aic(), min_score);
    }

    #[test]
    fn rejects_short_series() {
        let series = make_series((0..18).map(|i| i as f64).collect());
        let err = search_order(&series, &OrderSearchConfig::default()).unwrap_err();
        assert!(matches!(err, ForecastError::OrderSearch(_)));
    }

    #[test]
    fn rejects_degenerate_period() {
        let series = make_series(seasonal_values(48));
        let config = OrderSearchConfig {
            seasonal_period: 1,
            ..Default::default()
        };
        assert!(matches!(
            search_order(&series, &config),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
