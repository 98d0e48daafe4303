//! Pure helpers for aggregate study statistics.

/// Percentage of correct answers, rounded to the nearest whole number.
/// Returns 0 when no answers exist yet.
pub fn accuracy_percent(correct: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as i64
}
