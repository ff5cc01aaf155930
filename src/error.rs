//! Error types for the bestcast library.

use thiserror::Error;

/// Result type alias for forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting and model selection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Fewer observations than the operation requires.
    #[error("insufficient history: need at least {needed} months, got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    /// Seasonal decomposition could not be computed.
    #[error("seasonal decomposition failed: {0}")]
    Decomposition(String),

    /// Automatic order search found no usable model.
    #[error("order search failed: {0}")]
    OrderSearch(String),

    /// Forecast or error score requested before a successful fit.
    #[error("model must be fitted before forecasting or error scoring")]
    NotFitted,

    /// Timestamp validation error.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Mismatched lengths between paired sequences.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation failure.
    #[error("computation error: {0}")]
    Computation(String),

    /// A named model failed during selection; wraps the underlying cause.
    #[error("model {model} failed")]
    Model {
        model: String,
        #[source]
        source: Box<ForecastError>,
    },

    /// I/O failure while reading or writing series data.
    #[error("io error: {0}")]
    Io(String),

    /// Malformed record in an input file.
    #[error("parse error at record {record}: {message}")]
    Parse { record: usize, message: String },
}

impl ForecastError {
    /// Wrap an error with the name of the model that raised it.
    pub fn for_model(self, model: &str) -> Self {
        ForecastError::Model {
            model: model.to_string(),
            source: Box::new(self),
        }
    }
}
