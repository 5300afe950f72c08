//! Quiz engine: ask every pair once per round, re-ask the misses until none are left.
//!
//! The engine never touches the terminal. All interaction goes through a
//! [`Prompter`], so the same loop runs against a real console or a script.

use crate::error::QuizError;
use crate::matching::Matcher;
use crate::types::{Direction, QuizResult, Verdict, WordPair};
use rand::Rng;
use tracing::debug;

/// Interaction surface the quiz drives.
pub trait Prompter {
    /// Show `prompt` and return one line of input without its line terminator.
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError>;

    /// Report whether the last answer was correct.
    fn feedback(&mut self, verdict: &Verdict) -> Result<(), QuizError>;

    /// Announce that `missed` pairs are about to be asked again.
    fn retry(&mut self, missed: usize) -> Result<(), QuizError>;
}

/// A single quiz run over a vocabulary list.
#[derive(Debug, Clone)]
pub struct Quiz {
    words: Vec<WordPair>,
    direction: Direction,
    matcher: Matcher,
}

/// Tally of one round.
struct RoundOutcome {
    correct: usize,
    missed: Vec<WordPair>,
}

impl Quiz {
    pub fn new(words: Vec<WordPair>, direction: Direction) -> Self {
        Self {
            words,
            direction,
            matcher: Matcher::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Run rounds until one finishes with no misses.
    ///
    /// Only the first round counts toward the score. A user who never answers
    /// a pair correctly keeps the loop going until input runs out.
    pub fn run<R, P>(self, rng: &mut R, prompter: &mut P) -> Result<QuizResult, QuizError>
    where
        R: Rng + ?Sized,
        P: Prompter + ?Sized,
    {
        let total = self.words.len();
        let mut remaining = self.words;
        let mut first_pass = 0;
        let mut round = 1usize;

        loop {
            debug!(round, size = remaining.len(), "starting round");
            let outcome = play_round(remaining, self.direction, &self.matcher, rng, prompter)?;
            if round == 1 {
                first_pass = outcome.correct;
            }

            if outcome.missed.is_empty() {
                break;
            }

            debug!(round, missed = outcome.missed.len(), "round finished with misses");
            prompter.retry(outcome.missed.len())?;
            remaining = outcome.missed;
            round += 1;
        }

        let result = QuizResult {
            correct_on_first_attempt: first_pass,
            total,
        };
        debug!(
            rounds = round,
            correct = result.correct_on_first_attempt,
            total = result.total,
            "quiz finished"
        );
        Ok(result)
    }
}

/// Ask every pair in `words` exactly once, in random order.
fn play_round<R, P>(
    mut words: Vec<WordPair>,
    direction: Direction,
    matcher: &Matcher,
    rng: &mut R,
    prompter: &mut P,
) -> Result<RoundOutcome, QuizError>
where
    R: Rng + ?Sized,
    P: Prompter + ?Sized,
{
    let mut outcome = RoundOutcome {
        correct: 0,
        missed: Vec::with_capacity(words.len()),
    };

    while !words.is_empty() {
        let index = rng.gen_range(0..words.len());
        let pair = words.swap_remove(index);

        let verdict = ask_pair(&pair, direction, matcher, prompter)?;
        debug!(correct = verdict.is_correct, "answered");
        prompter.feedback(&verdict)?;

        if verdict.is_correct {
            outcome.correct += 1;
        } else {
            outcome.missed.push(pair);
        }
    }

    Ok(outcome)
}

fn ask_pair<P>(
    pair: &WordPair,
    direction: Direction,
    matcher: &Matcher,
    prompter: &mut P,
) -> Result<Verdict, QuizError>
where
    P: Prompter + ?Sized,
{
    let (prompt, expected) = pair.oriented(direction);
    let answer = prompter.ask(prompt)?;
    let is_correct = matcher.is_correct(&answer, expected);

    Ok(Verdict {
        prompt: prompt.to_string(),
        answer,
        expected: expected.to_string(),
        is_correct,
    })
}
