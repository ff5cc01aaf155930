//! End-to-end model comparison on synthetic monthly histories.

use bestcast::prelude::*;
use chrono::{Datelike, NaiveDate};

fn series_from(values: Vec<f64>) -> MonthlySeries {
    MonthlySeries::from_start(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(), values).unwrap()
}

/// Flat demand with a fixed December spike.
fn december_spike(years: usize) -> MonthlySeries {
    let values = (0..years * 12)
        .map(|i| if i % 12 == 11 { 110.0 } else { 100.0 })
        .collect();
    series_from(values)
}

#[test]
fn rolling_average_reproduces_a_stable_seasonal_pattern() {
    let model = RollingAverage::new(december_spike(3)).unwrap();
    let forecast = model.forecast(12).unwrap();

    assert_eq!(forecast.horizon(), 12);
    for (date, value) in forecast.iter() {
        let expected = if date.month() == 12 { 110.0 } else { 100.0 };
        assert!(
            (value - expected).abs() < 1.0,
            "month {}: got {value}, expected about {expected}",
            date.month()
        );
    }
}

#[test]
fn selector_runs_both_models_and_picks_one() {
    let history = december_spike(4);
    let mut selector = ModelSelector::new();
    let rolling = selector.add(Box::new(RollingAverage::new(history.clone()).unwrap()));
    let sarima = selector.add(Box::new(AutoSarima::new(history).unwrap()));

    let selection = selector.select_best().unwrap().unwrap();
    assert!(selection.id == rolling || selection.id == sarima);
    assert!(selection.mae.is_finite() && selection.mae >= 0.0);

    let winner = selector.get(selection.id).unwrap();
    let forecast = winner.forecast(6).unwrap();
    assert_eq!(forecast.horizon(), 6);
}

#[test]
fn winner_forecast_continues_the_calendar() {
    let history = december_spike(3);
    let last = history.last_timestamp().unwrap();
    let mut selector = ModelSelector::new();
    selector.add(Box::new(RollingAverage::new(history).unwrap()));

    let selection = selector.select_best().unwrap().unwrap();
    let forecast = selector.get(selection.id).unwrap().forecast(3).unwrap();

    assert_eq!(
        forecast.timestamps()[0],
        NaiveDate::from_ymd_opt(last.year() + 1, 1, 1).unwrap()
    );
}

#[test]
fn too_little_history_fails_fast_with_attribution() {
    let short = series_from((0..14).map(|i| 10.0 + i as f64).collect());

    // RollingAverage needs two full years for its decomposition.
    assert!(matches!(
        RollingAverage::new(short.clone()),
        Err(ForecastError::Decomposition(_))
    ));

    // The order search needs two full seasonal cycles.
    assert!(matches!(
        AutoSarima::new(short),
        Err(ForecastError::OrderSearch(_))
    ));
}

#[test]
fn unfitted_candidates_cannot_forecast() {
    let model = AutoSarima::new(december_spike(3)).unwrap();
    assert!(matches!(model.forecast(6), Err(ForecastError::NotFitted)));
}
