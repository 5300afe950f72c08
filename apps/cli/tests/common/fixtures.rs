//! Vocabulary files and settings for tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use vocab_core::{Direction, Matcher};
use vocab_quiz::config::Settings;

pub const CAT_DOG: &str = r#"[["cat","gato"],["dog","perro"]]"#;

/// A vocabulary file inside its own temporary directory.
pub struct VocabFile {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write `content` to `words.json` in a fresh temporary directory.
pub fn vocab_file(content: &str) -> VocabFile {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("words.json");
    std::fs::write(&path, content).expect("write vocabulary file");
    VocabFile { _dir: dir, path }
}

/// Settings with default matching for `path`.
pub fn settings(path: PathBuf, direction: Direction) -> Settings {
    Settings {
        file: path,
        direction,
        matcher: Matcher::default(),
        seed: None,
    }
}
