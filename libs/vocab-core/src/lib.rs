//! Core vocabulary-trainer library shared by the backend.
//!
//! Provides:
//! - Answer evaluation (exact / synonym / partial-credit classification)
//! - Levenshtein distance for near-miss detection
//! - Shared domain types (Word, Answer)
//! - Pure study-statistics helpers

pub mod evaluate;
pub mod matching;
pub mod stats;
pub mod types;

pub use evaluate::{evaluate, Verdict};
pub use matching::{levenshtein_distance, normalize, partial_credit, PartialCredit};
pub use stats::accuracy_percent;
pub use types::{Answer, Word};
