//! Forecasting models and the contract that unifies them.

mod rolling;
mod sarima;
mod traits;

pub use rolling::RollingAverage;
pub use sarima::AutoSarima;
pub use traits::{BoxedModel, ForecastModel};
