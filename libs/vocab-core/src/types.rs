//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};

/// One source/target vocabulary entry.
///
/// Serialized as a two-element array: `["hello", "hola"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The half shown to the user and the half expected back, in that order.
    pub fn oriented(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::Forward => (&self.source, &self.target),
            Direction::Reverse => (&self.target, &self.source),
        }
    }
}

impl From<(String, String)> for WordPair {
    fn from((source, target): (String, String)) -> Self {
        Self { source, target }
    }
}

impl From<WordPair> for (String, String) {
    fn from(pair: WordPair) -> Self {
        (pair.source, pair.target)
    }
}

/// Which half of each pair is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Show the source, expect the target.
    #[default]
    Forward,
    /// Show the target, expect the source.
    Reverse,
}

impl Direction {
    /// Keyword that selects reverse mode on the command line.
    pub const REVERSE_KEYWORD: &'static str = "reverse";

    /// Get the direction name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }

    /// Resolve the optional mode argument. Anything but the reverse keyword is forward.
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some(Self::REVERSE_KEYWORD) => Self::Reverse,
            _ => Self::Forward,
        }
    }
}

/// Matching mode for typed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingMode {
    #[default]
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl MatchingMode {
    /// Get the matching mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CaseInsensitive => "case-insensitive",
            Self::Fuzzy => "fuzzy",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "exact" => Some(Self::Exact),
            "case-insensitive" => Some(Self::CaseInsensitive),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The half that was shown.
    pub prompt: String,
    /// What the user typed, without the line terminator.
    pub answer: String,
    /// The half that was expected.
    pub expected: String,
    pub is_correct: bool,
}

/// First-pass score of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    /// Pairs answered correctly the first time they were presented.
    pub correct_on_first_attempt: usize,
    /// Number of pairs in the original list.
    pub total: usize,
}

impl QuizResult {
    /// First-pass accuracy as a whole percentage, rounded half away from zero.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct_on_first_attempt as f64 / self.total as f64 * 100.0).round() as u32
    }
}
