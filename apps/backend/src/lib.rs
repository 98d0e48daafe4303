pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the API router. Shared by the server binary and the
/// integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        // Word routes
        .route("/api/words", get(routes::words::list))
        .route("/api/words", post(routes::words::create))
        .route("/api/words/study", get(routes::words::study))
        .route("/api/words/favorites", get(routes::words::favorites))
        .route("/api/words/{id}", get(routes::words::get))
        .route("/api/words/{id}", put(routes::words::update))
        .route("/api/words/{id}", delete(routes::words::remove))
        .route("/api/words/{id}/favorite", patch(routes::words::toggle_favorite))
        // Answer routes
        .route("/api/answers/check", post(routes::answers::check))
        .route("/api/answers/word/{word_id}", get(routes::answers::by_word))
        .route("/api/answers/stats", get(routes::answers::stats))
        .route(
            "/api/answers/today-correct-words",
            get(routes::answers::today_correct_words),
        )
        .route("/api/answers", delete(routes::answers::clear))
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

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState { db: Arc::new(db) };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
