//! Error types for vocab-core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a vocabulary list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed vocabulary list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty vocabulary file")]
    EmptyFile,
}

/// Errors that can occur while loading a vocabulary file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Errors that abort a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to read answer: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write to terminal: {0}")]
    Output(#[source] io::Error),
}

impl QuizError {
    /// Input ended before the quiz was finished.
    pub fn end_of_input() -> Self {
        Self::Input(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the quiz was finished",
        ))
    }
}
