//! Monthly time-series forecasting with automatic model selection.
//!
//! The crate fits several forecasting models to a monthly history and
//! keeps the one with the lowest in-sample mean absolute error:
//!
//! - [`models::RollingAverage`] projects a trailing twelve-month average
//!   forward and re-applies a seasonal profile from a one-sided classical
//!   decomposition.
//! - [`models::AutoSarima`] runs an AIC grid search over seasonal ARIMA
//!   specifications and forecasts with the winner.
//!
//! Both implement [`models::ForecastModel`], and a
//! [`selection::ModelSelector`] arbitrates between them.
//!
//! ```no_run
//! use bestcast::pipeline;
//! use std::path::Path;
//!
//! let outcome = pipeline::run(
//!     Path::new("orders.csv"),
//!     Path::new("forecast.csv"),
//!     12,
//! )?;
//! println!("{} won with mae {:.2}", outcome.winner, outcome.mae);
//! # Ok::<(), bestcast::ForecastError>(())
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod seasonal;
pub mod selection;
pub mod stats;

pub use error::{ForecastError, Result};

/// Common imports for working with the crate.
pub mod prelude {
    pub use crate::core::{Forecast, MonthlySeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{AutoSarima, ForecastModel, RollingAverage};
    pub use crate::selection::{ModelId, ModelSelector, Selection};
}
