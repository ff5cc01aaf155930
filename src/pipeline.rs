//! End-to-end run: read a series, pick the best model, write its forecast.

use std::path::Path;

use log::info;

use crate::core::{Forecast, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::io::{read_series, write_forecast};
use crate::models::{AutoSarima, RollingAverage};
use crate::selection::ModelSelector;
use crate::stats::{adf_test, yearly_means};

/// What a pipeline run produced.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The history read from the input file.
    pub history: MonthlySeries,
    /// Forecast from the winning model.
    pub forecast: Forecast,
    /// Name of the winning model.
    pub winner: String,
    /// In-sample mean absolute error of the winner.
    pub mae: f64,
}

/// Read a CSV history, compare the candidate models by in-sample error,
/// forecast `horizon` months with the winner, and write the forecast.
pub fn run(input: &Path, output: &Path, horizon: usize) -> Result<PipelineOutcome> {
    let history = read_series(input)?;
    info!(
        "loaded {} observations from {}",
        history.len(),
        input.display()
    );
    for (year, mean) in yearly_means(&history) {
        info!("{year}: mean {mean:.2}");
    }
    if let Ok(adf) = adf_test(history.values()) {
        info!(
            "adf statistic {:.3} (p about {:.3}), stationary: {}",
            adf.statistic, adf.p_value, adf.is_stationary
        );
    }

    let mut selector = ModelSelector::new();
    selector.add(Box::new(RollingAverage::new(history.clone())?));
    selector.add(Box::new(AutoSarima::new(history.clone())?));

    let selection = selector
        .select_best()?
        .ok_or(ForecastError::EmptyData)?;
    let winner = selector
        .get(selection.id)
        .ok_or(ForecastError::EmptyData)?;

    let forecast = winner.forecast(horizon)?;
    write_forecast(output, &forecast)?;
    info!(
        "{}: forecast {} months to {}",
        winner.name(),
        horizon,
        output.display()
    );

    Ok(PipelineOutcome {
        history,
        forecast,
        winner: winner.name().to_string(),
        mae: selection.mae,
    })
}
