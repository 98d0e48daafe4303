//! Answer classification for the study quiz loop.

use serde::{Deserialize, Serialize};

use crate::matching::{normalize, partial_credit, PartialCredit};

/// Outcome of evaluating a submitted answer against the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Submission equals the canonical answer after normalization.
    Correct,
    /// Submission is the english text of another word with the same
    /// russian prompt.
    Synonym,
    /// Wrong, but close enough to warrant an encouraging hint.
    Partial(PartialCredit),
    /// Plain wrong.
    Incorrect,
}

/// Classify a submission. First match wins: exact, then synonym, then
/// partial credit, then incorrect. The synonym lookup itself belongs to
/// the data store; callers pass in whether a synonym word matched.
pub fn evaluate(correct_english: &str, submitted: &str, synonym_found: bool) -> Verdict {
    let submitted = normalize(submitted);
    let correct = normalize(correct_english);

    if submitted == correct {
        return Verdict::Correct;
    }

    if synonym_found {
        return Verdict::Synonym;
    }

    match partial_credit(&submitted, &correct) {
        Some(credit) => Verdict::Partial(credit),
        None => Verdict::Incorrect,
    }
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    pub fn is_synonym(&self) -> bool {
        matches!(self, Self::Synonym)
    }

    /// Hint shown to the user, if the verdict carries one. Correct and
    /// plain-incorrect verdicts have none.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Correct | Self::Incorrect => None,
            Self::Synonym => Some("This is synonym. Try another word.".to_string()),
            Self::Partial(PartialCredit::Prefix { letters_left }) => Some(format!(
                "Correct! Continue... ({} letters left)",
                letters_left
            )),
            Self::Partial(PartialCredit::Substring) => {
                Some("Partially correct! Try again!".to_string())
            }
            Self::Partial(PartialCredit::CloseMatch { .. }) => {
                Some("Very close! Check your answer".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exact_match_is_correct() {
        let verdict = evaluate("hello", "hello", false);
        assert_eq!(verdict, Verdict::Correct);
        assert!(verdict.is_correct());
        assert!(!verdict.is_synonym());
        assert_eq!(verdict.hint(), None);
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        assert_eq!(evaluate("hello", "  HeLLo  ", false), Verdict::Correct);
    }

    #[test]
    fn test_exact_match_wins_over_synonym_flag() {
        // A store that reports a synonym for an exact answer must not
        // downgrade the verdict.
        assert_eq!(evaluate("hello", "hello", true), Verdict::Correct);
    }

    #[test]
    fn test_synonym() {
        let verdict = evaluate("world", "peace", true);
        assert_eq!(verdict, Verdict::Synonym);
        assert!(!verdict.is_correct());
        assert_eq!(
            verdict.hint().as_deref(),
            Some("This is synonym. Try another word.")
        );
    }

    #[test]
    fn test_prefix_hint_reports_letters_left() {
        let verdict = evaluate("hello", "hel", false);
        assert!(verdict.is_partial());
        assert_eq!(
            verdict.hint().as_deref(),
            Some("Correct! Continue... (2 letters left)")
        );
    }

    #[test]
    fn test_substring_hint() {
        let verdict = evaluate("hello", "ell", false);
        assert_eq!(verdict.hint().as_deref(), Some("Partially correct! Try again!"));
    }

    #[test]
    fn test_close_match_hint() {
        let verdict = evaluate("hello", "helo", false);
        assert_eq!(verdict, Verdict::Partial(PartialCredit::CloseMatch { distance: 1 }));
        assert_eq!(verdict.hint().as_deref(), Some("Very close! Check your answer"));
    }

    #[test]
    fn test_incorrect() {
        let verdict = evaluate("hello", "xyzzy", false);
        assert_eq!(verdict, Verdict::Incorrect);
        assert!(!verdict.is_partial());
        assert_eq!(verdict.hint(), None);
    }

    #[test]
    fn test_synonym_beats_partial() {
        // "worl" would be a prefix of "world", but a synonym match takes
        // priority once exactness is ruled out.
        assert_eq!(evaluate("world", "worl", true), Verdict::Synonym);
    }
}
