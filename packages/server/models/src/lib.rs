#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the air quality server.
//!
//! Field names reproduce the wire format existing clients depend on:
//! the city prediction bodies use camelCase (`dayOfWeek`, `isWeekend`,
//! `fromDate`, `toDate`) while the station body keeps its historical
//! snake_case `station_name`. Do not "fix" the mix.

use serde::{Deserialize, Serialize};

/// `POST /predict` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPredictRequest {
    /// City name, matched case-sensitively against the catalog.
    pub city: String,
    /// Calendar year.
    pub year: i32,
    /// Month (unvalidated, passed through to the model).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Hour of day.
    pub hour: u32,
    /// Day of week, Monday = 0. Trusted as supplied.
    pub day_of_week: u32,
    /// Weekend flag (0 or 1). Trusted as supplied.
    pub is_weekend: u32,
}

/// `POST /predict` response body.
#[derive(Debug, Clone, Serialize)]
pub struct CityPredictResponse {
    /// Composite AQI, integer-truncated.
    pub aqi: i32,
    /// Twelve pollutant-molecule concentrations, integer-truncated.
    pub molecules: Vec<i32>,
}

/// `POST /predict-date-range` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeRequest {
    /// City name; must resolve, unlike the single-point endpoint.
    pub city: String,
    /// Inclusive start date, `YYYY-MM-DD`.
    pub from_date: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub to_date: String,
}

/// One hourly entry in the date-range response.
#[derive(Debug, Clone, Serialize)]
pub struct RangeEntry {
    /// Timestamp as `"YYYY-MM-DD H:00"`.
    pub datetime: String,
    /// Composite AQI for the hour.
    pub aqi: i32,
    /// Pollutant concentrations for the hour.
    pub molecules: Vec<i32>,
}

/// `POST /predict-date-range` response body.
#[derive(Debug, Clone, Serialize)]
pub struct DateRangeResponse {
    /// The requested city, echoed back.
    pub city: String,
    /// Hourly predictions ordered by (date, hour) ascending.
    pub predictions: Vec<RangeEntry>,
}

/// `POST /predict-new` request body (station model).
#[derive(Debug, Clone, Deserialize)]
pub struct StationPredictRequest {
    /// Station display name; historical snake_case field.
    pub station_name: String,
    /// Calendar year.
    pub year: i32,
    /// Month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Hour of day.
    pub hour: u32,
    /// Day of week, Monday = 0. Trusted as supplied.
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: u32,
    /// Weekend flag. Trusted as supplied.
    #[serde(rename = "isWeekend")]
    pub is_weekend: u32,
}

/// `POST /predict-new` response body.
#[derive(Debug, Clone, Serialize)]
pub struct StationPredictResponse {
    /// Composite AQI with the station offset applied (non-integral).
    pub aqi: f64,
    /// Pollutant concentrations, integer-truncated.
    pub molecules: Vec<i32>,
    /// Single-element list: either a generated explanation or the fixed
    /// acceptable-limits message.
    pub top_industries: Vec<String>,
}

/// `POST /chatbot` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// `POST /chatbot` response body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The generated answer.
    pub response: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
