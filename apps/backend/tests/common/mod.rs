//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating and cleaning up test data
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use vocab_trainer_backend::db::Database;
use vocab_trainer_backend::models::{CreateWordRequest, DbWord};
use vocab_trainer_backend::{router, AppState};

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test word directly in the database.
    pub async fn create_test_word(&self, english: &str, russian: &str) -> DbWord {
        self.db
            .create_word(&CreateWordRequest {
                english: english.to_string(),
                russian: russian.to_string(),
                example_en: format!("Example with {}.", english),
                example_ru: format!("Пример с {}.", russian),
            })
            .await
            .expect("Failed to create test word")
    }

    /// Remove a test word and its answers.
    pub async fn cleanup_word(&self, word_id: i64) {
        let _ = sqlx::query("DELETE FROM answers WHERE word_id = $1")
            .bind(word_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(word_id)
            .execute(self.db.pool())
            .await;
    }
}
