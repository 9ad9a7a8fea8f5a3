#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City and monitoring station catalog.
//!
//! This crate defines the canonical location catalog the regression models
//! were trained against: an ordered list of 26 cities (one-hot encoded for
//! the city model) and a table of 230 monitoring stations (resolved to a
//! plain integer index for the station model). Both are immutable at run
//! time; every index is derived from construction order alone.
//!
//! The two resolution strategies are intentionally different — the city
//! model was trained on a one-hot encoding, the station model on a literal
//! index feature — and must not be unified.

pub mod stations;

use thiserror::Error;

pub use stations::STATIONS;

/// Number of cities in the catalog, and therefore the width of a city
/// one-hot encoding.
pub const CITY_COUNT: usize = 26;

/// Cities known to the city model, in training order.
pub const CITIES: [&str; CITY_COUNT] = [
    "Ahmedabad",
    "Aizawl",
    "Amaravati",
    "Amritsar",
    "Bengaluru",
    "Bhopal",
    "Brajrajnagar",
    "Chandigarh",
    "Chennai",
    "Coimbatore",
    "Delhi",
    "Ernakulam",
    "Gurugram",
    "Guwahati",
    "Hyderabad",
    "Jaipur",
    "Jorapokhar",
    "Kochi",
    "Kolkata",
    "Lucknow",
    "Mumbai",
    "Patna",
    "Shillong",
    "Talcher",
    "Thiruvananthapuram",
    "Visakhapatnam",
];

/// A monitoring station entry.
///
/// The station's model index is its position in [`STATIONS`]; the code is
/// kept for display and auditing but plays no part in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationRecord {
    /// Regulator-assigned station code (e.g. `"DL001"`).
    pub code: &'static str,
    /// Human-readable display name, the resolution key.
    pub name: &'static str,
}

/// Errors from catalog resolution.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No station in the catalog has the given display name.
    #[error("Station not found: {name}")]
    StationNotFound {
        /// The name that failed to resolve.
        name: String,
    },
}

/// Returns the catalog index of a city, or `None` if unknown.
///
/// Matching is exact and case-sensitive, mirroring the training data.
#[must_use]
pub fn city_index(name: &str) -> Option<usize> {
    CITIES.iter().position(|c| *c == name)
}

/// One-hot encodes a city name over the city catalog.
///
/// Returns a vector of length [`CITY_COUNT`] with a single 1 at the city's
/// catalog index. An unknown city yields an all-zero vector rather than an
/// error: the single-point prediction endpoint has always accepted unknown
/// cities and predicted against the zero encoding. The range endpoint
/// rejects the zero encoding instead; that asymmetry is externally
/// observable behavior and is preserved, not unified.
#[must_use]
pub fn encode_city(name: &str) -> Vec<u8> {
    let mut encoding = vec![0u8; CITY_COUNT];
    if let Some(idx) = city_index(name) {
        encoding[idx] = 1;
    }
    encoding
}

/// Resolves a station display name to its model index.
///
/// Scans [`STATIONS`] in construction order and returns the index of the
/// first record whose name matches exactly. Duplicate display names exist
/// in the table, so first-match-wins is part of the contract: the lower
/// index is always the one the model sees.
///
/// # Errors
///
/// Returns [`CatalogError::StationNotFound`] if no record matches.
pub fn station_index(name: &str) -> Result<usize, CatalogError> {
    STATIONS
        .iter()
        .position(|s| s.name == name)
        .ok_or_else(|| CatalogError::StationNotFound {
            name: name.to_owned(),
        })
}
