//! PostgreSQL database operations

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use vocab_core::matching::normalize;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Word Repository ===

    /// Create a word. English is lowercased and trimmed (it is the
    /// canonical answer); the other text fields are trimmed.
    pub async fn create_word(&self, req: &CreateWordRequest) -> Result<DbWord> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            INSERT INTO words (english, russian, example_en, example_ru)
            VALUES ($1, $2, $3, $4)
            RETURNING id, english, russian, example_en, example_ru,
                      is_favorite, created_at, updated_at
            "#,
        )
        .bind(normalize(&req.english))
        .bind(req.russian.trim())
        .bind(req.example_en.trim())
        .bind(req.example_ru.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get word by ID
    pub async fn get_word(&self, word_id: i64) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, russian, example_en, example_ru,
                   is_favorite, created_at, updated_at
            FROM words
            WHERE id = $1
            "#,
        )
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get all words, newest first
    pub async fn get_words(&self) -> Result<Vec<DbWord>> {
        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, russian, example_en, example_ru,
                   is_favorite, created_at, updated_at
            FROM words
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Get favorite words, newest first
    pub async fn get_favorite_words(&self) -> Result<Vec<DbWord>> {
        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, russian, example_en, example_ru,
                   is_favorite, created_at, updated_at
            FROM words
            WHERE is_favorite
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Partially update a word. Returns None when the word does not
    /// exist. Blank text fields count as absent; an update must not
    /// erase the canonical answer.
    pub async fn update_word(
        &self,
        word_id: i64,
        req: &UpdateWordRequest,
    ) -> Result<Option<DbWord>> {
        let non_blank = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let word = sqlx::query_as::<_, DbWord>(
            r#"
            UPDATE words
            SET english = COALESCE($2, english),
                russian = COALESCE($3, russian),
                example_en = COALESCE($4, example_en),
                example_ru = COALESCE($5, example_ru),
                is_favorite = COALESCE($6, is_favorite),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, english, russian, example_en, example_ru,
                      is_favorite, created_at, updated_at
            "#,
        )
        .bind(word_id)
        .bind(req.english.as_deref().and_then(non_blank).map(|s| normalize(&s)))
        .bind(req.russian.as_deref().and_then(non_blank))
        .bind(req.example_en.as_deref().and_then(non_blank))
        .bind(req.example_ru.as_deref().and_then(non_blank))
        .bind(req.is_favorite)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Delete a word (its answers cascade). Returns false when absent.
    pub async fn delete_word(&self, word_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(word_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip a word's favorite flag. Returns None when the word does not
    /// exist.
    pub async fn toggle_favorite(&self, word_id: i64) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            UPDATE words
            SET is_favorite = NOT is_favorite,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, english, russian, example_en, example_ru,
                      is_favorite, created_at, updated_at
            "#,
        )
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Find a different word acceptable as a synonym answer: same russian
    /// prompt, english equal to the normalized submission.
    pub async fn find_synonym(
        &self,
        russian: &str,
        english_normalized: &str,
    ) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, russian, example_en, example_ru,
                   is_favorite, created_at, updated_at
            FROM words
            WHERE russian = $1 AND english = $2
            LIMIT 1
            "#,
        )
        .bind(russian)
        .bind(english_normalized)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Count unlearned words matching the study filters.
    pub async fn count_unlearned_words(
        &self,
        favorite_only: bool,
        exclude_id: Option<i64>,
    ) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM words w
            WHERE ($1 IS FALSE OR w.is_favorite)
              AND ($2::BIGINT IS NULL OR w.id <> $2)
              AND NOT EXISTS (
                  SELECT 1 FROM answers a
                  WHERE a.word_id = w.id AND a.is_correct
              )
            "#,
        )
        .bind(favorite_only)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Pick a uniformly random unlearned word matching the study filters.
    pub async fn random_unlearned_word(
        &self,
        favorite_only: bool,
        exclude_id: Option<i64>,
    ) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, english, russian, example_en, example_ru,
                   is_favorite, created_at, updated_at
            FROM words w
            WHERE ($1 IS FALSE OR w.is_favorite)
              AND ($2::BIGINT IS NULL OR w.id <> $2)
              AND NOT EXISTS (
                  SELECT 1 FROM answers a
                  WHERE a.word_id = w.id AND a.is_correct
              )
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(favorite_only)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Count all words
    pub async fn count_words(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM words")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count favorite words
    pub async fn count_favorite_words(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM words WHERE is_favorite")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count learned words (at least one correct answer logged)
    pub async fn count_learned_words(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM words w
            WHERE EXISTS (
                SELECT 1 FROM answers a
                WHERE a.word_id = w.id AND a.is_correct
            )
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    // === Answer Repository ===

    /// Append an attempt to the answer log. Plain insert, no dedup;
    /// created_at is assigned by the database.
    pub async fn insert_answer(
        &self,
        word_id: i64,
        answer_text: &str,
        is_correct: bool,
        is_synonym: bool,
    ) -> Result<DbAnswer> {
        let answer = sqlx::query_as::<_, DbAnswer>(
            r#"
            INSERT INTO answers (word_id, answer_text, is_correct, is_synonym)
            VALUES ($1, $2, $3, $4)
            RETURNING id, word_id, answer_text, is_correct, is_synonym, created_at
            "#,
        )
        .bind(word_id)
        .bind(answer_text)
        .bind(is_correct)
        .bind(is_synonym)
        .fetch_one(&self.pool)
        .await?;

        Ok(answer)
    }

    /// Whether the word already has a correct answer logged. Guards the
    /// synonym back-fill.
    pub async fn has_correct_answer(&self, word_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM answers WHERE word_id = $1 AND is_correct)",
        )
        .bind(word_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Get all attempts for a word, newest first
    pub async fn get_answers_for_word(&self, word_id: i64) -> Result<Vec<DbAnswer>> {
        let answers = sqlx::query_as::<_, DbAnswer>(
            r#"
            SELECT id, word_id, answer_text, is_correct, is_synonym, created_at
            FROM answers
            WHERE word_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(word_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    /// Count all answers
    pub async fn count_answers(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM answers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count correct answers, all time
    pub async fn count_correct_answers(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM answers WHERE is_correct")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count correct answers logged during the current local calendar day
    pub async fn count_correct_answers_today(&self) -> Result<i64> {
        let (start, end) = local_day_bounds_utc();
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM answers
            WHERE is_correct AND created_at >= $1 AND created_at <= $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Distinct words answered correctly during the current local day
    pub async fn today_correct_words(&self) -> Result<Vec<TodayCorrectWord>> {
        let (start, end) = local_day_bounds_utc();
        let words = sqlx::query_as::<_, TodayCorrectWord>(
            r#"
            SELECT DISTINCT ON (w.id)
                   w.english, w.russian, w.example_en, w.example_ru
            FROM answers a
            JOIN words w ON w.id = a.word_id
            WHERE a.is_correct AND a.created_at >= $1 AND a.created_at <= $2
            ORDER BY w.id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Clear the answer log. Returns the number of deleted rows.
    pub async fn delete_all_answers(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM answers")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// UTC bounds of the server's local calendar day, 00:00:00 through
/// 23:59:59.999 inclusive.
fn local_day_bounds_utc() -> (DateTime<Utc>, DateTime<Utc>) {
    let day = Local::now().date_naive();

    // 00:00:00 and 23:59:59.999 always exist for a valid date.
    let start = day.and_hms_opt(0, 0, 0).unwrap();
    let end = day.and_hms_milli_opt(23, 59, 59, 999).unwrap();

    (to_utc(start), to_utc(end))
}

fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    // DST can make a local wall-clock time ambiguous or skipped; take the
    // earliest valid instant, falling back to reading the time as UTC.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
