//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Create a word creation request body.
pub fn create_word_request(
    english: &str,
    russian: &str,
    example_en: &str,
    example_ru: &str,
) -> serde_json::Value {
    json!({
        "english": english,
        "russian": russian,
        "exampleEn": example_en,
        "exampleRu": example_ru,
    })
}

/// Create a check-answer request body.
pub fn check_answer_request(word_id: i64, answer: &str) -> serde_json::Value {
    json!({
        "wordId": word_id,
        "answer": answer,
    })
}

/// Generate a unique english term to avoid collisions between test runs
/// sharing a database.
pub fn unique_english(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

/// Generate a unique russian prompt.
pub fn unique_russian(prefix: &str) -> String {
    format!("{}-{}", prefix, unique_english("ru"))
}
