//! Command-line arguments and the validated settings built from them.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;
use vocab_core::matching::DEFAULT_FUZZY_THRESHOLD;
use vocab_core::{Direction, Matcher, MatchingMode};

/// Quiz yourself on a vocabulary list until every word is right.
#[derive(Debug, Parser)]
#[command(name = "vocab-quiz", version)]
pub struct Cli {
    /// JSON file holding an array of ["source", "target"] pairs
    pub file: Option<PathBuf>,

    /// Pass "reverse" to be shown the target and asked for the source
    pub mode: Option<String>,

    /// How answers are compared: exact, case-insensitive or fuzzy
    #[arg(long, default_value = "exact", value_parser = parse_matching_mode)]
    pub matching: MatchingMode,

    /// Minimum similarity (0.0 to 1.0) accepted in fuzzy mode
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
    pub fuzzy_threshold: f64,

    /// Seed for the question order, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Positional arguments after the mode are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

fn parse_matching_mode(value: &str) -> Result<MatchingMode, String> {
    MatchingMode::from_str(value).ok_or_else(|| {
        format!("unknown matching mode '{value}' (expected exact, case-insensitive or fuzzy)")
    })
}

/// Errors in the command-line configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("please specify a file with the vocabulary in it")]
    MissingFile,

    #[error("fuzzy threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub file: PathBuf,
    pub direction: Direction,
    pub matcher: Matcher,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let file = cli.file.ok_or(ConfigError::MissingFile)?;

        if !(0.0..=1.0).contains(&cli.fuzzy_threshold) {
            return Err(ConfigError::InvalidThreshold(cli.fuzzy_threshold));
        }

        Ok(Self {
            file,
            direction: Direction::from_mode(cli.mode.as_deref()),
            matcher: Matcher::new(cli.matching, cli.fuzzy_threshold),
            seed: cli.seed,
        })
    }
}
