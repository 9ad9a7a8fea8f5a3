//! Date-range expansion into an hourly prediction series.
//!
//! Expands an inclusive `[from, to]` day span into every `(date, hour)`
//! pair in ascending order and runs the assemble/predict/interpret cycle
//! for each. The ordering is load-bearing for time-series consumers and
//! the prediction capability is not guaranteed concurrency-safe, so the
//! loop is strictly sequential — no fan-out, no merge, no dedup.

use airaware_catalog::encode_city;
use airaware_forecast_models::{HourlyPrediction, TemporalDescriptor};
use chrono::NaiveDate;

use crate::ForecastError;
use crate::features::{assemble_city_features, interpret_city_output};
use crate::predictor::Predictor;

/// Date format accepted by the range endpoints.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expands a city and an inclusive date span into 24 hourly predictions
/// per day, ordered by (date, hour) ascending.
///
/// Temporal fields are always computed from the iterated date (Monday = 0,
/// weekend = Saturday/Sunday) — this path takes no per-hour caller input.
/// An inverted span (`to < from`) yields an empty series, not an error.
///
/// # Errors
///
/// * [`ForecastError::DateParse`] if either bound is not `YYYY-MM-DD`.
/// * [`ForecastError::InvalidLocation`] if the city is not in the catalog.
///   Unlike the single-point endpoint, this path refuses the all-zero
///   encoding; both behaviors are externally observed and kept as-is.
/// * Any predictor failure aborts the whole expansion with no partial
///   results.
pub async fn expand_range(
    city: &str,
    from: &str,
    to: &str,
    predictor: &dyn Predictor,
) -> Result<Vec<HourlyPrediction>, ForecastError> {
    let from_date = NaiveDate::parse_from_str(from, DATE_FORMAT)?;
    let to_date = NaiveDate::parse_from_str(to, DATE_FORMAT)?;

    let encoding = encode_city(city);
    if encoding.iter().all(|v| *v == 0) {
        return Err(ForecastError::InvalidLocation {
            city: city.to_owned(),
        });
    }

    let mut predictions = Vec::new();
    let mut current = from_date;

    while current <= to_date {
        for hour in 0..24 {
            let temporal = TemporalDescriptor::for_date_hour(current, hour);
            let features = assemble_city_features(&encoding, &temporal);
            let output = predictor.predict(&features).await?;
            let interpreted = interpret_city_output(&output)?;

            predictions.push(HourlyPrediction {
                datetime: format!("{} {hour}:00", current.format(DATE_FORMAT)),
                aqi: interpreted.aqi,
                molecules: interpreted.molecules,
            });
        }

        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }

    log::debug!(
        "Expanded {city} {from}..{to} into {} hourly predictions",
        predictions.len()
    );

    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Echoes a fixed output row and records every input it sees.
    struct RecordingPredictor {
        output: Vec<f32>,
        calls: Mutex<Vec<Vec<f32>>>,
    }

    impl RecordingPredictor {
        fn new(output: Vec<f32>) -> Self {
            Self {
                output,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl Predictor for RecordingPredictor {
        async fn predict(&self, features: &[f32]) -> Result<Vec<f32>, ForecastError> {
            self.calls.lock().unwrap().push(features.to_vec());
            Ok(self.output.clone())
        }
    }

    /// Fails every call.
    struct FailingPredictor;

    #[async_trait::async_trait]
    impl Predictor for FailingPredictor {
        async fn predict(&self, _features: &[f32]) -> Result<Vec<f32>, ForecastError> {
            Err(ForecastError::Upstream {
                message: "model not loaded".to_string(),
            })
        }
    }

    fn city_output(aqi: f32) -> Vec<f32> {
        let mut output = vec![10.0f32; 12];
        output.push(aqi);
        output
    }

    #[tokio::test]
    async fn single_day_yields_24_ordered_hours() {
        let predictor = RecordingPredictor::new(city_output(150.0));
        let result = expand_range("Delhi", "2024-01-01", "2024-01-01", &predictor)
            .await
            .unwrap();

        assert_eq!(result.len(), 24);
        for (hour, entry) in result.iter().enumerate() {
            assert_eq!(entry.datetime, format!("2024-01-01 {hour}:00"));
            assert_eq!(entry.aqi, 150);
        }

        // 2024-01-01 is a Monday: day_of_week 0, is_weekend 0, for every hour.
        let calls = predictor.calls.lock().unwrap();
        for (hour, features) in calls.iter().enumerate() {
            assert_eq!(features.len(), 32);
            assert_eq!(features[29], hour as f32);
            assert_eq!(features[30], 0.0);
            assert_eq!(features[31], 0.0);
        }
    }

    #[tokio::test]
    async fn inverted_span_is_empty_not_an_error() {
        let predictor = RecordingPredictor::new(city_output(100.0));
        let result = expand_range("Delhi", "2024-01-02", "2024-01-01", &predictor)
            .await
            .unwrap();
        assert!(result.is_empty());
        assert!(predictor.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn multi_day_span_orders_dates_ascending() {
        let predictor = RecordingPredictor::new(city_output(90.0));
        let result = expand_range("Mumbai", "2024-02-28", "2024-03-01", &predictor)
            .await
            .unwrap();

        // 2024 is a leap year: Feb 28, Feb 29, Mar 1.
        assert_eq!(result.len(), 72);
        assert_eq!(result[0].datetime, "2024-02-28 0:00");
        assert_eq!(result[24].datetime, "2024-02-29 0:00");
        assert_eq!(result[48].datetime, "2024-03-01 0:00");
        assert_eq!(result[71].datetime, "2024-03-01 23:00");
    }

    #[tokio::test]
    async fn weekend_days_set_the_weekend_flag() {
        let predictor = RecordingPredictor::new(city_output(80.0));
        // 2024-01-06 is a Saturday.
        expand_range("Delhi", "2024-01-06", "2024-01-06", &predictor)
            .await
            .unwrap();
        let calls = predictor.calls.lock().unwrap();
        assert_eq!(calls[0][30], 5.0);
        assert_eq!(calls[0][31], 1.0);
    }

    #[tokio::test]
    async fn unknown_city_fails_before_any_prediction() {
        let predictor = RecordingPredictor::new(city_output(100.0));
        let err = expand_range("Atlantis", "2024-01-01", "2024-01-02", &predictor)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidLocation { .. }));
        assert!(err.is_client_error());
        assert!(predictor.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_date_fails_before_any_prediction() {
        let predictor = RecordingPredictor::new(city_output(100.0));
        let err = expand_range("Delhi", "01-01-2024", "2024-01-02", &predictor)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::DateParse(_)));
        assert!(err.is_client_error());
        assert!(predictor.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_aborts_with_no_partial_results() {
        let err = expand_range("Delhi", "2024-01-01", "2024-01-03", &FailingPredictor)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::Upstream { .. }));
    }
}
