//! HTTP handler functions for the air quality API.

use actix_web::{HttpResponse, web};
use airaware_ai::{ACCEPTABLE_LIMITS_MESSAGE, EXPLANATION_AQI_THRESHOLD, explain_industries};
use airaware_catalog::{encode_city, station_index};
use airaware_forecast::{
    ForecastError, assemble_city_features, assemble_station_features, expand_range,
    interpret_city_output, interpret_station_output,
};
use airaware_forecast_models::TemporalDescriptor;
use airaware_server_models::{
    ApiHealth, ChatRequest, ChatResponse, CityPredictRequest, CityPredictResponse,
    DateRangeRequest, DateRangeResponse, RangeEntry, StationPredictRequest,
    StationPredictResponse,
};

use crate::AppState;

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /predict`
///
/// Single-point city prediction. The caller's temporal fields are trusted
/// as supplied, and an unknown city silently predicts against the all-zero
/// encoding — both are externally observed behaviors this endpoint keeps.
pub async fn predict_city(
    state: web::Data<AppState>,
    body: web::Json<CityPredictRequest>,
) -> HttpResponse {
    let encoding = encode_city(&body.city);
    let temporal = temporal_from_request(&body);
    let features = assemble_city_features(&encoding, &temporal);

    let result = match state.city_predictor.predict(&features).await {
        Ok(output) => interpret_city_output(&output),
        Err(e) => Err(e),
    };

    match result {
        Ok(prediction) => HttpResponse::Ok().json(CityPredictResponse {
            aqi: prediction.aqi,
            molecules: prediction.molecules,
        }),
        Err(e) => forecast_error_response(&e),
    }
}

/// `POST /predict-date-range`
///
/// Hourly predictions for every day in the inclusive span, ordered by
/// (date, hour) ascending. Unlike `/predict`, an unresolvable city is a
/// client error here.
pub async fn predict_date_range(
    state: web::Data<AppState>,
    body: web::Json<DateRangeRequest>,
) -> HttpResponse {
    match expand_range(
        &body.city,
        &body.from_date,
        &body.to_date,
        state.city_predictor.as_ref(),
    )
    .await
    {
        Ok(predictions) => HttpResponse::Ok().json(DateRangeResponse {
            city: body.city.clone(),
            predictions: predictions
                .into_iter()
                .map(|p| RangeEntry {
                    datetime: p.datetime,
                    aqi: p.aqi,
                    molecules: p.molecules,
                })
                .collect(),
        }),
        Err(e) => forecast_error_response(&e),
    }
}

/// `POST /predict-new`
///
/// Station prediction. Resolution failure is a 404; a low AQI triggers the
/// generated industry/remediation explanation, otherwise the fixed
/// acceptable-limits message is returned.
pub async fn predict_station(
    state: web::Data<AppState>,
    body: web::Json<StationPredictRequest>,
) -> HttpResponse {
    let index = match station_index(&body.station_name) {
        Ok(index) => index,
        Err(e) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let temporal = TemporalDescriptor {
        year: body.year,
        month: body.month,
        day: body.day,
        hour: body.hour,
        day_of_week: body.day_of_week,
        is_weekend: body.is_weekend,
    };
    let features = assemble_station_features(index, &temporal);

    let prediction = match state.station_predictor.predict(&features).await {
        Ok(output) => match interpret_station_output(&output) {
            Ok(prediction) => prediction,
            Err(e) => return forecast_error_response(&e),
        },
        Err(e) => return forecast_error_response(&e),
    };

    let top_industries = if prediction.aqi < EXPLANATION_AQI_THRESHOLD {
        match explain_industries(state.llm.as_ref(), &prediction.molecules).await {
            Ok(explanation) => vec![explanation],
            Err(e) => {
                log::error!("Failed to generate explanation: {e}");
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Failed to generate explanation"
                }));
            }
        }
    } else {
        vec![ACCEPTABLE_LIMITS_MESSAGE.to_string()]
    };

    HttpResponse::Ok().json(StationPredictResponse {
        aqi: prediction.aqi,
        molecules: prediction.molecules,
        top_industries,
    })
}

/// `POST /chatbot`
///
/// Retrieval-augmented chat over the knowledge document. Calls are
/// serialized through a mutex because every answer appends to the
/// process-wide conversation memory.
pub async fn chatbot(state: web::Data<AppState>, body: web::Json<ChatRequest>) -> HttpResponse {
    let mut chatbot = state.chatbot.lock().await;

    match chatbot.ask(&body.message).await {
        Ok(response) => HttpResponse::Ok().json(ChatResponse { response }),
        Err(e) => {
            log::error!("Chatbot request failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Chatbot request failed"
            }))
        }
    }
}

/// Builds the model-1 temporal descriptor straight from the request body.
/// Derivable fields are deliberately not recomputed.
const fn temporal_from_request(body: &CityPredictRequest) -> TemporalDescriptor {
    TemporalDescriptor {
        year: body.year,
        month: body.month,
        day: body.day,
        hour: body.hour,
        day_of_week: body.day_of_week,
        is_weekend: body.is_weekend,
    }
}

/// Maps a [`ForecastError`] to its response class: user-correctable
/// kinds are 400 with the concrete message, everything else is a
/// generic 500 with the detail logged server-side.
fn forecast_error_response(e: &ForecastError) -> HttpResponse {
    if e.is_client_error() {
        HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))
    } else {
        log::error!("Prediction failed: {e}");
        HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Prediction failed"
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use airaware_ai::{AiError, LlmProvider};
    use airaware_forecast::Predictor;
    use airaware_rag::{Chatbot, EmbeddingProvider, RagError};
    use tokio::sync::Mutex;

    struct FixedPredictor(Vec<f32>);

    #[async_trait::async_trait]
    impl Predictor for FixedPredictor {
        async fn predict(&self, _features: &[f32]) -> Result<Vec<f32>, ForecastError> {
            Ok(self.0.clone())
        }
    }

    struct FailingPredictor;

    #[async_trait::async_trait]
    impl Predictor for FailingPredictor {
        async fn predict(&self, _features: &[f32]) -> Result<Vec<f32>, ForecastError> {
            Err(ForecastError::Upstream {
                message: "model not loaded".to_string(),
            })
        }
    }

    struct StubLlm;

    #[async_trait::async_trait]
    impl LlmProvider for StubLlm {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            Ok("1. steel industry".to_string())
        }
    }

    struct StubEmbedder;

    #[async_trait::async_trait]
    impl EmbeddingProvider for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, RagError> {
            Ok(vec![1.0, 0.0])
        }
    }

    async fn test_state(
        city_output: Result<Vec<f32>, ()>,
        station_output: Result<Vec<f32>, ()>,
    ) -> web::Data<AppState> {
        let city_predictor: Box<dyn Predictor> = match city_output {
            Ok(output) => Box::new(FixedPredictor(output)),
            Err(()) => Box::new(FailingPredictor),
        };
        let station_predictor: Box<dyn Predictor> = match station_output {
            Ok(output) => Box::new(FixedPredictor(output)),
            Err(()) => Box::new(FailingPredictor),
        };
        let chatbot = Chatbot::build("air quality facts", Box::new(StubEmbedder), Box::new(StubLlm))
            .await
            .unwrap();

        web::Data::new(AppState {
            city_predictor,
            station_predictor,
            llm: Box::new(StubLlm),
            chatbot: Mutex::new(chatbot),
        })
    }

    fn city_output(aqi: f32) -> Vec<f32> {
        let mut output = vec![20.0f32; 12];
        output.push(aqi);
        output
    }

    fn station_output(slot4: f32) -> Vec<f32> {
        let mut output = vec![20.0f32; 12];
        output[4] = slot4;
        output
    }

    fn city_request(city: &str) -> web::Json<CityPredictRequest> {
        web::Json(CityPredictRequest {
            city: city.to_string(),
            year: 2024,
            month: 3,
            day: 15,
            hour: 9,
            day_of_week: 4,
            is_weekend: 0,
        })
    }

    fn station_request(name: &str) -> web::Json<StationPredictRequest> {
        web::Json(StationPredictRequest {
            station_name: name.to_string(),
            year: 2024,
            month: 3,
            day: 15,
            hour: 9,
            day_of_week: 4,
            is_weekend: 0,
        })
    }

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn predict_returns_truncated_aqi_and_molecules() {
        let state = test_state(Ok(city_output(187.9)), Ok(station_output(96.7))).await;
        let resp = predict_city(state, city_request("Delhi")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["aqi"], 187);
        assert_eq!(json["molecules"].as_array().unwrap().len(), 12);
    }

    #[actix_web::test]
    async fn predict_accepts_unknown_city_silently() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(50.0))).await;
        let resp = predict_city(state, city_request("Atlantis")).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn predict_maps_upstream_failure_to_500() {
        let state = test_state(Err(()), Ok(station_output(50.0))).await;
        let resp = predict_city(state, city_request("Delhi")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn date_range_rejects_unknown_city_with_400() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(50.0))).await;
        let resp = predict_date_range(
            state,
            web::Json(DateRangeRequest {
                city: "Atlantis".to_string(),
                from_date: "2024-01-01".to_string(),
                to_date: "2024-01-02".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn date_range_rejects_malformed_date_with_400() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(50.0))).await;
        let resp = predict_date_range(
            state,
            web::Json(DateRangeRequest {
                city: "Delhi".to_string(),
                from_date: "January 1".to_string(),
                to_date: "2024-01-02".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn date_range_returns_ordered_hourly_series() {
        let state = test_state(Ok(city_output(120.0)), Ok(station_output(50.0))).await;
        let resp = predict_date_range(
            state,
            web::Json(DateRangeRequest {
                city: "Delhi".to_string(),
                from_date: "2024-01-01".to_string(),
                to_date: "2024-01-01".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["city"], "Delhi");
        let predictions = json["predictions"].as_array().unwrap();
        assert_eq!(predictions.len(), 24);
        assert_eq!(predictions[0]["datetime"], "2024-01-01 0:00");
        assert_eq!(predictions[23]["datetime"], "2024-01-01 23:00");
    }

    #[actix_web::test]
    async fn station_prediction_returns_404_for_unknown_station() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(50.0))).await;
        let resp = predict_station(state, station_request("Nowhere")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn low_aqi_station_gets_generated_explanation() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(50.4))).await;
        let resp = predict_station(state, station_request("Knowledge Park")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        // trunc(50.4) + 3.6 = 53.6, below the threshold.
        assert_eq!(json["aqi"], 53.6);
        assert_eq!(json["top_industries"][0], "1. steel industry");
    }

    #[actix_web::test]
    async fn high_aqi_station_gets_fixed_message() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(180.0))).await;
        let resp = predict_station(state, station_request("Alipur, Delhi")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["top_industries"][0], ACCEPTABLE_LIMITS_MESSAGE);
    }

    #[actix_web::test]
    async fn chatbot_answers_and_accumulates_memory() {
        let state = test_state(Ok(city_output(50.0)), Ok(station_output(50.0))).await;
        let resp = chatbot(
            state.clone(),
            web::Json(ChatRequest {
                message: "what is AQI?".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(state.chatbot.lock().await.turn_count(), 1);
    }
}
