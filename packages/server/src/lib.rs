#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for air quality predictions.
//!
//! Serves the city and station prediction endpoints (backed by the
//! remote inference service) and the retrieval-augmented chatbot over
//! the knowledge document. Conversation memory lives in process and is
//! shared by all chatbot callers.

mod handlers;

use std::path::Path;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use airaware_ai::{LlmProvider, create_provider_from_env};
use airaware_forecast::{HttpPredictor, Predictor};
use airaware_rag::{Chatbot, OllamaEmbeddings, load_document_text};
use tokio::sync::Mutex;

/// Served model name for the city-level predictor.
pub const CITY_MODEL: &str = "city";
/// Served model name for the station-level predictor.
pub const STATION_MODEL: &str = "station";

/// Knowledge document used when `KNOWLEDGE_DOC` is unset.
pub const DEFAULT_KNOWLEDGE_DOC: &str = "data/knowledge.pdf";

/// Shared application state.
pub struct AppState {
    /// Predictor for the 26-city composite model.
    pub city_predictor: Box<dyn Predictor>,
    /// Predictor for the station-index model.
    pub station_predictor: Box<dyn Predictor>,
    /// LLM provider for station explanations.
    pub llm: Box<dyn LlmProvider>,
    /// The chatbot, serialized behind a mutex because answers mutate
    /// the shared conversation memory.
    pub chatbot: Mutex<Chatbot>,
}

/// Starts the air quality API server.
///
/// Builds the inference-service predictors, the LLM provider, and the
/// chatbot (loading and embedding the knowledge document), then starts
/// the Actix-Web HTTP server. This is a regular async function — the
/// caller is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the LLM provider configuration is invalid, the knowledge
/// document cannot be read, or embedding it fails.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let city_predictor = HttpPredictor::from_env(CITY_MODEL);
    let station_predictor = HttpPredictor::from_env(STATION_MODEL);

    let llm = create_provider_from_env().expect("Failed to create LLM provider");

    log::info!("Loading knowledge document...");
    let doc_path =
        std::env::var("KNOWLEDGE_DOC").unwrap_or_else(|_| DEFAULT_KNOWLEDGE_DOC.to_string());
    let document_text =
        load_document_text(Path::new(&doc_path)).expect("Failed to load knowledge document");

    log::info!("Embedding knowledge document...");
    let embedder = OllamaEmbeddings::from_env();
    let chat_provider = create_provider_from_env().expect("Failed to create LLM provider");
    let chatbot = Chatbot::build(&document_text, Box::new(embedder), chat_provider)
        .await
        .expect("Failed to build chatbot");

    let state = web::Data::new(AppState {
        city_predictor: Box::new(city_predictor),
        station_predictor: Box::new(station_predictor),
        llm,
        chatbot: Mutex::new(chatbot),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/predict", web::post().to(handlers::predict_city))
            .route(
                "/predict-date-range",
                web::post().to(handlers::predict_date_range),
            )
            .route("/predict-new", web::post().to(handlers::predict_station))
            .route("/chatbot", web::post().to(handlers::chatbot))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
