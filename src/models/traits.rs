//! The capability contract every forecasting model satisfies.

use crate::core::Forecast;
use crate::error::Result;

/// A model that can be trained on a monthly series, extended past its end,
/// and scored by its in-sample mean absolute error.
///
/// Implementations hold their training series from construction; `fit`
/// performs (or finalizes) estimation, and `forecast`/`mae` may require it
/// to have run first.
pub trait ForecastModel {
    /// Train the model on its series.
    fn fit(&mut self) -> Result<()>;

    /// Forecast `horizon` months past the end of the training series.
    fn forecast(&self, horizon: usize) -> Result<Forecast>;

    /// In-sample mean absolute error of the fitted model.
    fn mae(&self) -> Result<f64>;

    /// Human-readable model name, used in logs and error attribution.
    fn name(&self) -> &str;
}

/// Owned trait object, the form models take inside a selector.
pub type BoxedModel = Box<dyn ForecastModel>;
