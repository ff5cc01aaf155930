//! Core data structures for monthly time series forecasting.

mod forecast;
mod series;

pub use forecast::Forecast;
pub use series::{next_month, MonthlySeries, MONTHS_PER_YEAR};
