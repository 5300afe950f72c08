//! Answer matching for typed answers.

use crate::types::MatchingMode;

/// Default similarity a fuzzy answer needs to count as correct.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// How typed answers are compared with the expected answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    pub mode: MatchingMode,
    pub fuzzy_threshold: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            mode: MatchingMode::Exact,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl Matcher {
    pub fn new(mode: MatchingMode, fuzzy_threshold: f64) -> Self {
        Self {
            mode,
            fuzzy_threshold,
        }
    }

    /// Whether `typed` is accepted for `expected`.
    pub fn is_correct(&self, typed: &str, expected: &str) -> bool {
        compare_answers(typed, expected, self.mode, self.fuzzy_threshold)
    }
}

/// Compare a typed answer to the expected answer.
///
/// `Exact` is byte-for-byte: case and every whitespace character count.
/// The other modes collapse runs of whitespace first.
pub fn compare_answers(typed: &str, expected: &str, mode: MatchingMode, fuzzy_threshold: f64) -> bool {
    match mode {
        MatchingMode::Exact => typed == expected,
        MatchingMode::CaseInsensitive => {
            normalize_whitespace(typed).to_lowercase() == normalize_whitespace(expected).to_lowercase()
        }
        MatchingMode::Fuzzy => {
            let similarity = normalized_similarity(
                &normalize_whitespace(typed).to_lowercase(),
                &normalize_whitespace(expected).to_lowercase(),
            );
            similarity >= fuzzy_threshold
        }
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Calculate Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
