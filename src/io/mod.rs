//! Reading and writing monthly series as CSV.

mod csv_io;

pub use csv_io::{read_series, write_forecast, write_series};
