// HTTP surface: routes quiz, search and lead requests onto the QuizService.

pub mod handlers;
pub mod response;

use crate::service::QuizService;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub service: QuizService,
    pub app_name: Arc<str>,
    pub version: Arc<str>,
}

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/quiz/submit", post(handlers::submit_quiz))
        .route("/api/cars/search", post(handlers::search_cars))
        .route("/api/leads/capture", post(handlers::capture_lead))
        .route("/api/test/cars", get(handlers::all_cars))
        .route("/api/cars/makes", get(handlers::makes))
        .route("/api/cars/models", get(handlers::models))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Builds the CORS policy for the quiz frontend.
///
/// A `*` entry mirrors whatever origin the browser sends. Unparseable
/// origins are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o.trim() == "*") {
        AllowOrigin::mirror_request()
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("⚠️ Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
