pub mod config;
pub mod terminal;

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{Quiz, QuizResult};

use crate::config::{Cli, Settings};
use crate::terminal::TerminalPrompter;

/// Install the stderr log subscriber. Filtered by `RUST_LOG`, warnings only by default.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_cli(cli)?;
    tracing::info!(
        file = %settings.file.display(),
        direction = settings.direction.as_str(),
        matching = settings.matcher.mode.as_str(),
        "starting quiz"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = TerminalPrompter::new(stdin.lock(), stdout.lock());

    match settings.seed {
        Some(seed) => run_quiz(&settings, &mut StdRng::seed_from_u64(seed), &mut prompter)?,
        None => run_quiz(&settings, &mut rand::thread_rng(), &mut prompter)?,
    };

    Ok(())
}

/// Load the vocabulary, run the quiz to completion and print the score.
pub fn run_quiz<G, R, W>(
    settings: &Settings,
    rng: &mut G,
    prompter: &mut TerminalPrompter<R, W>,
) -> anyhow::Result<QuizResult>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    let words = vocab_core::load(&settings.file)?;
    let quiz = Quiz::new(words, settings.direction).with_matcher(settings.matcher);

    let result = quiz.run(rng, prompter)?;

    tracing::info!(
        correct = result.correct_on_first_attempt,
        total = result.total,
        percent = result.percent(),
        "quiz complete"
    );
    prompter.report(&result)?;

    Ok(result)
}
