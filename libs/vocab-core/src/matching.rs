//! Answer matching primitives: normalization, edit distance and
//! partial-credit detection.

use serde::{Deserialize, Serialize};

/// Normalize an answer for comparison: lowercase and trim surrounding
/// whitespace. Words are stored already normalized, user input is not.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Calculate Levenshtein distance between two strings using the full
/// (m+1) x (n+1) dynamic-programming table over chars, unit costs for
/// insert, delete and substitute. Inputs are compared as given; callers
/// normalize first.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        matrix[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution
        }
    }

    matrix[m][n]
}

/// Maximum edit distance still counted as a near miss.
pub const CLOSE_MATCH_DISTANCE: usize = 2;

/// How a non-correct answer earned partial credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialCredit {
    /// The correct answer starts with the submission; `letters_left` chars
    /// remain to type.
    Prefix { letters_left: usize },
    /// The submission appears somewhere inside the correct answer.
    Substring,
    /// Within edit distance [`CLOSE_MATCH_DISTANCE`] of the correct answer.
    CloseMatch { distance: usize },
}

/// Check a wrong answer for partial credit. Both inputs must already be
/// normalized. Priority is fixed: prefix, then substring, then edit
/// distance; the first rule that applies decides the hint.
pub fn partial_credit(submitted: &str, correct: &str) -> Option<PartialCredit> {
    if submitted.is_empty() {
        return None;
    }

    if correct.starts_with(submitted) {
        let letters_left = correct.chars().count() - submitted.chars().count();
        return Some(PartialCredit::Prefix { letters_left });
    }

    if correct.contains(submitted) {
        return Some(PartialCredit::Substring);
    }

    let distance = levenshtein_distance(submitted, correct);
    if distance <= CLOSE_MATCH_DISTANCE {
        return Some(PartialCredit::CloseMatch { distance });
    }

    None
}
