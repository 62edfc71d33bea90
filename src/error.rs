//! Startup error types.
//!
//! Anything that goes wrong while assembling [`Config`](crate::config::Config)
//! is fatal and reported through [`ConfigError`]. Runtime failures (transport
//! errors talking to the flight-data service) travel as `color_eyre` reports.

use thiserror::Error;

/// Configuration could not be assembled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable is set but does not parse as a number.
    #[error("{key} must be a finite number, got {value:?}")]
    Invalid {
        /// Name of the variable.
        key: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A coordinate is outside its valid range.
    #[error("{key} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Name of the variable.
        key: &'static str,
        /// The offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Longitude scaling is undefined at the poles.
    #[error("center latitude {0} is at a pole; longitude degrees have no width there")]
    PoleLatitude(f64),

    /// The optional TOML config file exists but could not be parsed.
    #[error("failed to parse config file {path}: {message}")]
    File {
        /// Path of the file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The configured API base URL is unusable.
    #[error("invalid API base URL {0:?}")]
    BaseUrl(String),
}
