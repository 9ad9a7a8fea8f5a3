#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Domain types shared by the feature assembler, the date-range expander,
//! and the server.
//!
//! The models were trained on fixed-width, fixed-order inputs and produce
//! fixed-width outputs; the constants here pin those widths so the wire
//! between assembler, predictor, and interpreter cannot drift.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of pollutant-molecule concentrations in every model output.
pub const MOLECULE_COUNT: usize = 12;

/// Output slot holding the composite AQI in the city model.
pub const CITY_AQI_SLOT: usize = 12;

/// Output slot read as the composite AQI in the station model.
///
/// Inherited from the trained artifact together with [`STATION_AQI_OFFSET`];
/// no derivation for the slot choice is available.
pub const STATION_AQI_SLOT: usize = 4;

/// Constant offset added to the truncated station AQI.
pub const STATION_AQI_OFFSET: f64 = 3.6;

/// Number of temporal fields appended to every feature vector.
pub const TEMPORAL_FIELD_COUNT: usize = 6;

/// The temporal half of a feature vector.
///
/// For single-point predictions the caller supplies every field, including
/// `day_of_week` and `is_weekend`, and the assembler passes them through
/// untouched even though they are derivable from the date. The range
/// expander never trusts caller input and always builds descriptors via
/// [`TemporalDescriptor::for_date_hour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalDescriptor {
    /// Calendar year.
    pub year: i32,
    /// Month (1-12; out-of-range values pass through unchecked).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Hour of day (0-23 when derived; unchecked when caller-supplied).
    pub hour: u32,
    /// Day of week, Monday = 0 through Sunday = 6.
    pub day_of_week: u32,
    /// 1 for Saturday/Sunday, 0 otherwise.
    pub is_weekend: u32,
}

impl TemporalDescriptor {
    /// Builds a descriptor for a calendar date and hour, deriving
    /// `day_of_week` (ISO, Monday = 0) and `is_weekend` from the date.
    #[must_use]
    pub fn for_date_hour(date: NaiveDate, hour: u32) -> Self {
        let day_of_week = date.weekday().num_days_from_monday();
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour,
            day_of_week,
            is_weekend: u32::from(day_of_week >= 5),
        }
    }

    /// The six temporal fields in model input order.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn fields(&self) -> [i64; TEMPORAL_FIELD_COUNT] {
        [
            self.year as i64,
            self.month as i64,
            self.day as i64,
            self.hour as i64,
            self.day_of_week as i64,
            self.is_weekend as i64,
        ]
    }
}

/// Interpreted city model output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPrediction {
    /// Composite AQI, integer-truncated from the model output.
    pub aqi: i32,
    /// Pollutant-molecule concentrations, integer-truncated.
    pub molecules: Vec<i32>,
}

/// Interpreted station model output.
///
/// `aqi` is a non-integral number: the raw slot value is truncated and the
/// fixed offset is added afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationPrediction {
    /// Composite AQI with the station offset applied.
    pub aqi: f64,
    /// Pollutant-molecule concentrations, integer-truncated.
    pub molecules: Vec<i32>,
}

/// One hour of a date-range expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPrediction {
    /// Timestamp as `"YYYY-MM-DD H:00"` (hour unpadded).
    pub datetime: String,
    /// Composite AQI for the hour.
    pub aqi: i32,
    /// Pollutant-molecule concentrations for the hour.
    pub molecules: Vec<i32>,
}
