#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Feature vector assembly and prediction orchestration.
//!
//! Turns a resolved location plus a [`TemporalDescriptor`] into the exact
//! ordered `f32` vector each regression model was trained on, interprets
//! the model's fixed-width output vector into named quantities, and expands
//! an inclusive date span into a deterministic hourly prediction series.
//!
//! The models themselves are opaque: anything implementing [`Predictor`]
//! can serve predictions, which is also how tests substitute deterministic
//! stubs for the inference server.
//!
//! [`TemporalDescriptor`]: airaware_forecast_models::TemporalDescriptor

pub mod features;
pub mod predictor;
pub mod range;

use thiserror::Error;

pub use features::{
    assemble_city_features, assemble_station_features, interpret_city_output,
    interpret_station_output,
};
pub use predictor::{HttpPredictor, Predictor};
pub use range::expand_range;

/// Errors from feature assembly, interpretation, and range expansion.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A date string did not match `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// A city name resolved to the all-zero encoding in a context that
    /// requires a known city.
    #[error("Invalid city: {city}")]
    InvalidLocation {
        /// The city name that failed to resolve.
        city: String,
    },

    /// HTTP transport to the inference server failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The prediction capability failed or returned an unusable output.
    #[error("Prediction failed: {message}")]
    Upstream {
        /// Description of what went wrong.
        message: String,
    },
}

impl ForecastError {
    /// `true` for error kinds the client can correct (bad date, unknown
    /// city), `false` for upstream failures. The server uses this to keep
    /// the 4xx/5xx split stable so callers only retry server errors.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::DateParse(_) | Self::InvalidLocation { .. })
    }
}
