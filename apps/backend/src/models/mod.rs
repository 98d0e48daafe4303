//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::types::{Answer, Word};

// === Database Entity Types ===

/// Word row stored in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub english: String,
    pub russian: String,
    pub example_en: String,
    pub example_ru: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbWord {
    /// Convert to API word type
    pub fn to_api_word(&self) -> Word {
        Word {
            id: self.id,
            english: self.english.clone(),
            russian: self.russian.clone(),
            example_en: self.example_en.clone(),
            example_ru: self.example_ru.clone(),
            is_favorite: self.is_favorite,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Answer row stored in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbAnswer {
    pub id: i64,
    pub word_id: i64,
    pub answer_text: String,
    pub is_correct: bool,
    pub is_synonym: bool,
    pub created_at: DateTime<Utc>,
}

impl DbAnswer {
    /// Convert to API answer type
    pub fn to_api_answer(&self) -> Answer {
        Answer {
            id: self.id,
            word_id: self.word_id,
            answer_text: self.answer_text.clone(),
            is_correct: self.is_correct,
            is_synonym: self.is_synonym,
            created_at: self.created_at,
        }
    }
}

// === Request Types ===

/// POST /api/words body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordRequest {
    pub english: String,
    pub russian: String,
    pub example_en: String,
    pub example_ru: String,
}

/// PUT /api/words/{id} body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordRequest {
    pub english: Option<String>,
    pub russian: Option<String>,
    pub example_en: Option<String>,
    pub example_ru: Option<String>,
    pub is_favorite: Option<bool>,
}

/// GET /api/words/study query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyWordQuery {
    pub favorite_only: Option<bool>,
    pub exclude_id: Option<i64>,
}

/// POST /api/answers/check body. Fields are optional at the serde level
/// so a missing one reaches the handler's validation and reports the
/// contractual bad-request error instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerRequest {
    pub word_id: Option<i64>,
    pub answer: Option<String>,
}

// === Response Types ===

/// GET /api/words/study response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyWordResponse {
    pub word: Word,
    pub unlearned_count: i64,
}

/// POST /api/answers/check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerResponse {
    pub is_correct: bool,
    pub is_partial: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Present (and true) only when a synonym was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_synonym: Option<bool>,
    pub correct_answer: String,
    pub today_correct_answers: i64,
    pub total_correct_answers: i64,
    pub total_words: i64,
}

/// GET /api/answers/stats response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_answers: i64,
    pub correct_answers: i64,
    /// Rounded percentage, 0 when no answers exist.
    pub accuracy: i64,
    pub total_words: i64,
    pub learned_words: i64,
    pub favorite_words: i64,
}

/// One entry of GET /api/answers/today-correct-words
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodayCorrectWord {
    pub english: String,
    pub russian: String,
    pub example_en: String,
    pub example_ru: String,
}

/// DELETE /api/answers response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAnswersResponse {
    pub deleted_count: u64,
}
