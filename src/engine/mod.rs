//! Seasonal ARIMA fitting, forecasting, and automatic order search.
//!
//! The model layer treats this engine as a service: `order_search` picks a
//! SARIMA specification by AIC over a bounded grid, and `Sarima` fits that
//! specification and produces forecasts and in-sample error scores.

mod diff;
mod optim;
mod order_search;
mod sarima;

pub use diff::{
    difference, integrate, seasonal_difference, seasonal_integrate, suggest_differencing,
    suggest_seasonal_differencing,
};
pub use optim::{nelder_mead, NelderMeadConfig, NelderMeadResult};
pub use order_search::{search_order, OrderSearchConfig, OrderSearchResult};
pub use sarima::{Order, Sarima, SeasonalOrder};
