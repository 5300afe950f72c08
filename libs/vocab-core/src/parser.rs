//! Vocabulary list parser.
//!
//! # Format
//! ```json
//! [
//!     ["hello", "hola"],
//!     ["goodbye", "adios"]
//! ]
//! ```
//!
//! Each entry must be an array of exactly two strings.

use crate::error::{LoadError, ParseError, Result};
use crate::types::WordPair;
use std::fs;
use std::path::Path;

/// Parse vocabulary content into word pairs, keeping file order.
pub fn parse(content: &str) -> Result<Vec<WordPair>> {
    parse_slice(content.as_bytes())
}

/// Parse raw file bytes. Invalid UTF-8 is reported as a parse error.
pub fn parse_slice(content: &[u8]) -> Result<Vec<WordPair>> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(ParseError::EmptyFile);
    }

    let words: Vec<WordPair> = serde_json::from_slice(content)?;
    Ok(words)
}

/// Read a vocabulary file and parse it.
pub fn load(path: impl AsRef<Path>) -> std::result::Result<Vec<WordPair>, LoadError> {
    let path = path.as_ref();

    let content = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_slice(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = words.len(), "loaded vocabulary");
    Ok(words)
}
