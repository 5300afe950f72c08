//! Core vocabulary quiz library shared by the command-line app.
//!
//! Provides:
//! - JSON word-list parser
//! - Answer matching (exact by default, case-insensitive and Levenshtein fuzzy on request)
//! - Quiz engine with first-pass scoring and retry rounds
//! - Shared types (WordPair, Direction, QuizResult, etc.)

pub mod error;
pub mod matching;
pub mod parser;
pub mod quiz;
pub mod types;

pub use error::{LoadError, ParseError, QuizError, Result};
pub use matching::{compare_answers, levenshtein_distance, normalized_similarity, Matcher};
pub use parser::{load, parse};
pub use quiz::{Prompter, Quiz};
pub use types::{Direction, MatchingMode, QuizResult, Verdict, WordPair};
