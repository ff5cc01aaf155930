//! Error metrics, stationarity testing, and calendar aggregates.

mod aggregates;
mod metrics;
mod stationarity;

pub use aggregates::{monthly_means, yearly_means};
pub use metrics::{mean_absolute_error, mean_absolute_residual};
pub use stationarity::{adf_test, StationarityResult};
