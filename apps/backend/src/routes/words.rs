//! Word endpoints: CRUD, favorites and study-word selection

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/words
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Word>>> {
    let words = state.db.get_words().await?;
    Ok(Json(words.iter().map(DbWord::to_api_word).collect()))
}

/// GET /api/words/favorites
pub async fn favorites(State(state): State<AppState>) -> Result<Json<Vec<Word>>> {
    let words = state.db.get_favorite_words().await?;
    Ok(Json(words.iter().map(DbWord::to_api_word).collect()))
}

/// GET /api/words/study
///
/// Picks a random word that has not been learned yet (no correct answer
/// on record), optionally restricted to favorites and excluding the word
/// shown last.
pub async fn study(
    State(state): State<AppState>,
    Query(query): Query<StudyWordQuery>,
) -> Result<Json<StudyWordResponse>> {
    let favorite_only = query.favorite_only.unwrap_or(false);

    let unlearned_count = state
        .db
        .count_unlearned_words(favorite_only, query.exclude_id)
        .await?;

    let word = state
        .db
        .random_unlearned_word(favorite_only, query.exclude_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No words available for study".to_string()))?;

    Ok(Json(StudyWordResponse {
        word: word.to_api_word(),
        unlearned_count,
    }))
}

/// GET /api/words/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
) -> Result<Json<Word>> {
    let word = state
        .db
        .get_word(word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    Ok(Json(word.to_api_word()))
}

/// POST /api/words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<Word>)> {
    let any_empty = [
        &payload.english,
        &payload.russian,
        &payload.example_en,
        &payload.example_ru,
    ]
    .iter()
    .any(|field| field.trim().is_empty());

    if any_empty {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let word = state.db.create_word(&payload).await?;
    Ok((StatusCode::CREATED, Json(word.to_api_word())))
}

/// PUT /api/words/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
    Json(payload): Json<UpdateWordRequest>,
) -> Result<Json<Word>> {
    let word = state
        .db
        .update_word(word_id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    Ok(Json(word.to_api_word()))
}

/// DELETE /api/words/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = state.db.delete_word(word_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Word not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/words/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
) -> Result<Json<Word>> {
    let word = state
        .db
        .toggle_favorite(word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    Ok(Json(word.to_api_word()))
}
