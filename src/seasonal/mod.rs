//! One-sided seasonal decomposition and seasonal profiles.
//!
//! Splits a monthly series into trend, seasonal, and residual components
//! using only past and current observations at each point, and derives
//! per-month seasonal offsets from the result.

mod decompose;
mod profile;

pub use decompose::{decompose, Decomposition};
pub use profile::SeasonalProfile;
