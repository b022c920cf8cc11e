pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verse_core::{EffectiveSettings, VerseSettings};

use crate::config::Config;
use crate::error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Server settings merged with optional per-verse overrides
    pub fn settings(&self, verse: Option<&VerseSettings>) -> EffectiveSettings {
        EffectiveSettings::merge(&self.config.practice, verse)
    }

    /// Reject request text longer than the configured byte limit.
    pub fn check_input(&self, texts: &[&str]) -> Result<(), ApiError> {
        let limit = self.config.max_input_bytes;
        match texts.iter().map(|t| t.len()).find(|len| *len > limit) {
            Some(len) => Err(ApiError::BadRequest(format!(
                "text is {} bytes, the limit is {}",
                len, limit
            ))),
            None => Ok(()),
        }
    }
}

/// Build the API router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/settings", get(routes::settings::get_all))
        .route("/api/tokenize", post(routes::typed::tokenize))
        .route("/api/grade", post(routes::typed::grade))
        .route("/api/sequence/chunks", post(routes::sequence::chunks))
        .route("/api/sequence/replay", post(routes::sequence::replay))
        .route("/api/stealth/replay", post(routes::stealth::replay))
        .route("/api/citation/segments", post(routes::citation::segments))
        .route("/api/citation/replay", post(routes::citation::replay))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();
    tracing::info!(
        words_per_chunk = config.practice.words_per_chunk,
        pass_threshold = config.practice.pass_threshold,
        max_input_bytes = config.max_input_bytes,
        "Loaded practice settings"
    );

    let app = build_router(AppState::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
