//! Feature vector assembly and model output interpretation.
//!
//! Field order and casting here must reproduce the training pipeline
//! bit-for-bit: every element is cast to `f32`, the city encoding comes
//! first, then the six temporal fields. No range validation is performed —
//! month 13 or hour 25 pass straight through, exactly as observed.

use airaware_forecast_models::{
    CITY_AQI_SLOT, CityPrediction, MOLECULE_COUNT, STATION_AQI_OFFSET, STATION_AQI_SLOT,
    StationPrediction, TemporalDescriptor,
};

use crate::ForecastError;

/// Assembles the city model input: 26 one-hot slots followed by the six
/// temporal fields, all as `f32`. One row, batch size 1.
#[must_use]
pub fn assemble_city_features(encoding: &[u8], temporal: &TemporalDescriptor) -> Vec<f32> {
    let mut features = Vec::with_capacity(encoding.len() + temporal.fields().len());
    features.extend(encoding.iter().map(|v| f32::from(*v)));
    append_temporal(&mut features, temporal);
    features
}

/// Assembles the station model input: the literal station index followed by
/// the six temporal fields.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn assemble_station_features(station_index: usize, temporal: &TemporalDescriptor) -> Vec<f32> {
    let mut features = Vec::with_capacity(1 + temporal.fields().len());
    features.push(station_index as f32);
    append_temporal(&mut features, temporal);
    features
}

#[allow(clippy::cast_precision_loss)]
fn append_temporal(features: &mut Vec<f32>, temporal: &TemporalDescriptor) {
    features.extend(temporal.fields().iter().map(|v| *v as f32));
}

/// Interprets a city model output vector.
///
/// The AQI is the integer truncation (not rounding) of slot
/// [`CITY_AQI_SLOT`]; the first [`MOLECULE_COUNT`] slots are the
/// truncated pollutant concentrations.
///
/// # Errors
///
/// Returns [`ForecastError::Upstream`] if the output vector is too short,
/// which indicates a model/shape mismatch rather than a bad request.
pub fn interpret_city_output(output: &[f32]) -> Result<CityPrediction, ForecastError> {
    if output.len() <= CITY_AQI_SLOT {
        return Err(shape_error("city", output.len(), CITY_AQI_SLOT + 1));
    }

    Ok(CityPrediction {
        aqi: truncate(output[CITY_AQI_SLOT]),
        molecules: truncate_molecules(output),
    })
}

/// Interprets a station model output vector.
///
/// The AQI is the integer truncation of slot [`STATION_AQI_SLOT`] plus
/// [`STATION_AQI_OFFSET`] — truncate first, then add, so the result is a
/// non-integral number. The slot/offset pair is inherited from the trained
/// artifact and reproduced as-is.
///
/// # Errors
///
/// Returns [`ForecastError::Upstream`] if the output vector is too short.
pub fn interpret_station_output(output: &[f32]) -> Result<StationPrediction, ForecastError> {
    if output.len() < MOLECULE_COUNT {
        return Err(shape_error("station", output.len(), MOLECULE_COUNT));
    }

    Ok(StationPrediction {
        aqi: f64::from(truncate(output[STATION_AQI_SLOT])) + STATION_AQI_OFFSET,
        molecules: truncate_molecules(output),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f32) -> i32 {
    value as i32
}

fn truncate_molecules(output: &[f32]) -> Vec<i32> {
    output[..MOLECULE_COUNT].iter().map(|v| truncate(*v)).collect()
}

fn shape_error(model: &str, got: usize, want: usize) -> ForecastError {
    ForecastError::Upstream {
        message: format!("{model} model output has {got} slots, expected at least {want}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airaware_catalog::encode_city;

    fn temporal() -> TemporalDescriptor {
        TemporalDescriptor {
            year: 2024,
            month: 3,
            day: 15,
            hour: 9,
            day_of_week: 4,
            is_weekend: 0,
        }
    }

    #[test]
    fn city_features_are_one_hot_plus_temporal() {
        let features = assemble_city_features(&encode_city("Mumbai"), &temporal());
        assert_eq!(features.len(), 32);
        assert!((features[20] - 1.0).abs() < f32::EPSILON);
        for (i, v) in features[..26].iter().enumerate() {
            if i != 20 {
                assert!(v.abs() < f32::EPSILON, "slot {i} should be 0");
            }
        }
        assert_eq!(&features[26..], &[2024.0, 3.0, 15.0, 9.0, 4.0, 0.0]);
    }

    #[test]
    fn station_features_lead_with_index() {
        let features = assemble_station_features(197, &temporal());
        assert_eq!(features.len(), 7);
        assert_eq!(features, vec![197.0, 2024.0, 3.0, 15.0, 9.0, 4.0, 0.0]);
    }

    #[test]
    fn caller_supplied_temporal_fields_are_not_recomputed() {
        // 2024-03-15 is actually a Friday (weekday 4); the caller says 6.
        let t = TemporalDescriptor {
            day_of_week: 6,
            is_weekend: 1,
            ..temporal()
        };
        let features = assemble_station_features(0, &t);
        assert_eq!(&features[5..], &[6.0, 1.0]);
    }

    #[test]
    fn out_of_range_fields_pass_through_unchecked() {
        let t = TemporalDescriptor {
            month: 13,
            hour: 25,
            ..temporal()
        };
        let features = assemble_station_features(0, &t);
        assert_eq!(features[2], 13.0);
        assert_eq!(features[4], 25.0);
    }

    #[test]
    fn city_output_truncates_instead_of_rounding() {
        let mut output = vec![0.0f32; 13];
        output[12] = 187.9;
        output[0] = 45.7;
        let pred = interpret_city_output(&output).unwrap();
        assert_eq!(pred.aqi, 187);
        assert_eq!(pred.molecules[0], 45);
        assert_eq!(pred.molecules.len(), 12);
    }

    #[test]
    fn city_echo_round_trip_is_exact() {
        let molecules: Vec<f32> = (1..=12).map(|v| v as f32).collect();
        let mut output = molecules.clone();
        output.push(142.0);
        let pred = interpret_city_output(&output).unwrap();
        assert_eq!(pred.aqi, 142);
        assert_eq!(pred.molecules, (1..=12).collect::<Vec<i32>>());
    }

    #[test]
    fn station_output_adds_offset_after_truncation() {
        let mut output = vec![0.0f32; 12];
        output[4] = 96.7;
        let pred = interpret_station_output(&output).unwrap();
        assert!((pred.aqi - 99.6).abs() < 1e-9);
    }

    #[test]
    fn short_city_output_is_an_upstream_error() {
        let err = interpret_city_output(&[1.0; 12]).unwrap_err();
        assert!(matches!(err, ForecastError::Upstream { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn short_station_output_is_an_upstream_error() {
        let err = interpret_station_output(&[1.0; 11]).unwrap_err();
        assert!(matches!(err, ForecastError::Upstream { .. }));
    }
}
