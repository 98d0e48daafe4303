//! Answer endpoints: the check-answer evaluator, the attempt log and
//! aggregate statistics.

use axum::{
    extract::{Path, State},
    Json,
};
use vocab_core::{accuracy_percent, evaluate, normalize};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/answers/check
///
/// Classifies the submission against the target word (exact, synonym,
/// partial credit or plain wrong), logs the attempt, applies the synonym
/// back-fill credit and returns fresh counters.
pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>> {
    let word_id = payload.word_id.unwrap_or(0);
    let answer = payload.answer.unwrap_or_default();

    if word_id <= 0 || answer.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Word ID and answer are required".to_string(),
        ));
    }

    let word = state
        .db
        .get_word(word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    let submitted = normalize(&answer);

    // Another word with the same russian prompt whose english matches the
    // submission counts as a synonym, but only when the answer is not
    // already exact.
    let synonym_word = if submitted == normalize(&word.english) {
        None
    } else {
        state.db.find_synonym(&word.russian, &submitted).await?
    };

    let verdict = evaluate(&word.english, &answer, synonym_word.is_some());

    // The attempt is logged exactly once per check, whatever the verdict.
    state
        .db
        .insert_answer(
            word.id,
            &submitted,
            verdict.is_correct(),
            verdict.is_synonym(),
        )
        .await?;

    // Back-fill: the first synonym hit retroactively marks the synonym
    // word itself as learned.
    if let Some(synonym) = synonym_word {
        if !state.db.has_correct_answer(synonym.id).await? {
            state.db.insert_answer(synonym.id, &submitted, true, false).await?;
        }
    }

    let today_correct_answers = state.db.count_correct_answers_today().await?;
    let total_correct_answers = state.db.count_correct_answers().await?;
    let total_words = state.db.count_words().await?;

    Ok(Json(CheckAnswerResponse {
        is_correct: verdict.is_correct(),
        is_partial: verdict.is_partial(),
        hint: verdict.hint(),
        is_synonym: verdict.is_synonym().then_some(true),
        correct_answer: word.english,
        today_correct_answers,
        total_correct_answers,
        total_words,
    }))
}

/// GET /api/answers/word/{wordId}
pub async fn by_word(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
) -> Result<Json<Vec<Answer>>> {
    let answers = state.db.get_answers_for_word(word_id).await?;
    Ok(Json(answers.iter().map(DbAnswer::to_api_answer).collect()))
}

/// GET /api/answers/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let total_answers = state.db.count_answers().await?;
    let correct_answers = state.db.count_correct_answers().await?;
    let total_words = state.db.count_words().await?;
    let learned_words = state.db.count_learned_words().await?;
    let favorite_words = state.db.count_favorite_words().await?;

    Ok(Json(StatsResponse {
        total_answers,
        correct_answers,
        accuracy: accuracy_percent(correct_answers, total_answers),
        total_words,
        learned_words,
        favorite_words,
    }))
}

/// GET /api/answers/today-correct-words
pub async fn today_correct_words(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodayCorrectWord>>> {
    let words = state.db.today_correct_words().await?;
    Ok(Json(words))
}

/// DELETE /api/answers
pub async fn clear(State(state): State<AppState>) -> Result<Json<ClearAnswersResponse>> {
    let deleted_count = state.db.delete_all_answers().await?;
    Ok(Json(ClearAnswersResponse { deleted_count }))
}
