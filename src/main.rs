mod api;
mod catalog;
mod config;
mod explainer;
mod matcher;
mod model;
mod normalizer;
mod notifier;
mod service;

use api::AppState;
use catalog::{AirtableSource, Catalog};
use config::{load_config, AppConfig};
use explainer::OpenAiExplainer;
use matcher::MatcherImpl;
use notifier::EmailNotifier;
use service::QuizService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config_path = std::env::var("CAR_QUIZ_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let timeout = Duration::from_secs(config.http_timeout_seconds);

    if !config.airtable.is_configured() {
        warn!("⚠️ Airtable credentials missing, serving reference catalog");
    }
    let source = match AirtableSource::new(config.airtable.clone(), timeout) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize catalog client: {}", e);
            return;
        }
    };

    let explainer = match OpenAiExplainer::new(config.openai.clone(), timeout) {
        Ok(e) => e,
        Err(e) => {
            error!("Failed to initialize explainer client: {}", e);
            return;
        }
    };

    let service = QuizService::new(
        Catalog::new(Arc::new(source)),
        Arc::new(MatcherImpl::new()),
        Arc::new(explainer),
        Arc::new(EmailNotifier::new(config.email.clone(), timeout)),
    );

    let app = api::router(
        AppState {
            service,
            app_name: Arc::from(config.app_name.as_str()),
            version: Arc::from(config.version.as_str()),
        },
        &config.cors_origins,
    );

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            return;
        }
    };

    info!("🚀 {} v{} listening on {}", config.app_name, config.version, config.bind_addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
