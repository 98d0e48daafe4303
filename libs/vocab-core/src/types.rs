//! Shared domain types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored word pair. `english` is the canonical answer, lowercased and
/// trimmed at write time; `russian` is the study prompt and the grouping
/// key for synonym detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub russian: String,
    pub example_en: String,
    pub example_ru: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One logged attempt at a word. Append-only; a word counts as learned
/// once it has at least one attempt with `is_correct` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i64,
    pub word_id: i64,
    #[serde(rename = "answer")]
    pub answer_text: String,
    pub is_correct: bool,
    pub is_synonym: bool,
    pub created_at: DateTime<Utc>,
}
