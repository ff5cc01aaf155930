//! CSV codec for monthly series.
//!
//! Input files carry a header row and two columns, a `%d.%m.%y` date and a
//! numeric value. Dates are normalized to the first of their month; rows
//! with an empty or non-numeric value are skipped.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::core::{Forecast, MonthlySeries};
use crate::error::{ForecastError, Result};

const DATE_FORMAT: &str = "%d.%m.%y";

/// Read a monthly series from a two-column CSV file.
pub fn read_series(path: &Path) -> Result<MonthlySeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ForecastError::Io(e.to_string()))?;

    let mut timestamps = Vec::new();
    let mut values = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ForecastError::Io(e.to_string()))?;
        let row = index + 2; // header is row 1
        if record.len() < 2 {
            return Err(ForecastError::Parse {
                record: row,
                message: format!("expected 2 columns, got {}", record.len()),
            });
        }

        let raw_date = &record[0];
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|e| {
            ForecastError::Parse {
                record: row,
                message: format!("bad date {raw_date:?}: {e}"),
            }
        })?;
        let date = date.with_day(1).ok_or_else(|| ForecastError::Parse {
            record: row,
            message: format!("cannot normalize {raw_date:?} to month start"),
        })?;

        let raw_value = &record[1];
        if raw_value.is_empty() {
            warn!("row {row}: empty value, skipped");
            continue;
        }
        let value: f64 = raw_value.parse().map_err(|e| ForecastError::Parse {
            record: row,
            message: format!("bad value {raw_value:?}: {e}"),
        })?;
        if !value.is_finite() {
            warn!("row {row}: non-finite value, skipped");
            continue;
        }

        timestamps.push(date);
        values.push(value);
    }

    MonthlySeries::new(timestamps, values)
}

/// Write a series as `date,value` rows with ISO dates.
pub fn write_series(path: &Path, series: &MonthlySeries) -> Result<()> {
    write_rows(path, series.iter())
}

/// Write a forecast in the same shape as [`write_series`].
pub fn write_forecast(path: &Path, forecast: &Forecast) -> Result<()> {
    write_rows(path, forecast.iter())
}

fn write_rows<I>(path: &Path, rows: I) -> Result<()>
where
    I: Iterator<Item = (NaiveDate, f64)>,
{
    let mut writer = csv::Writer::from_path(path).map_err(|e| ForecastError::Io(e.to_string()))?;
    writer
        .write_record(["date", "value"])
        .map_err(|e| ForecastError::Io(e.to_string()))?;
    for (date, value) in rows {
        writer
            .write_record([date.format("%Y-%m-%d").to_string(), value.to_string()])
            .map_err(|e| ForecastError::Io(e.to_string()))?;
    }
    writer.flush().map_err(|e| ForecastError::Io(e.to_string()))
}
