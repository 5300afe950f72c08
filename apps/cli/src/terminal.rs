//! Line-oriented terminal renderer.
//!
//! Each question takes two lines: the prompt and the line the user types on.
//! Once answered, both are erased and replaced by a single colored line.

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::{style, Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use vocab_core::{Prompter, QuizError, QuizResult, Verdict};

/// Lines written per question: the prompt and the echoed input line.
const QUESTION_LINES: u16 = 2;

/// Move the cursor up and clear, `n` times.
pub fn clear_last_lines<W: Write>(out: &mut W, n: u16) -> io::Result<()> {
    for _ in 0..n {
        queue!(out, MoveUp(1), Clear(ClearType::CurrentLine))?;
    }
    Ok(())
}

/// Read one line and strip its terminator.
///
/// A stream that ends before a full line is read is an error, even when a
/// partial line was received.
pub fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    match line.strip_suffix('\n') {
        Some(answer) => Ok(answer.strip_suffix('\r').unwrap_or(answer).to_string()),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the quiz was finished",
        )),
    }
}

/// Final score line.
pub fn format_summary(result: &QuizResult) -> String {
    format!(
        "You got {}/{} ({}%) correct on your first go!",
        result.correct_on_first_attempt,
        result.total,
        result.percent()
    )
}

/// [`Prompter`] over any buffered reader and writer, usually locked stdin/stdout.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the first-pass score after a blank line.
    pub fn report(&mut self, result: &QuizResult) -> Result<(), QuizError> {
        writeln!(self.output).map_err(QuizError::Output)?;
        writeln!(self.output, "{}", format_summary(result)).map_err(QuizError::Output)?;
        self.output.flush().map_err(QuizError::Output)
    }

    fn redraw(&mut self, verdict: &Verdict) -> io::Result<()> {
        clear_last_lines(&mut self.output, QUESTION_LINES)?;

        let color = if verdict.is_correct { Color::Green } else { Color::Red };
        let line = format!("What is \"{}\"? {}", verdict.prompt, verdict.answer);
        writeln!(self.output, "{}", style(line).with(color))?;

        if !verdict.is_correct {
            let hint = format!("Correct: {}", verdict.expected);
            writeln!(self.output, "  {}", style(hint).with(Color::DarkGrey))?;
        }

        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.output, "What is \"{}\"?\n> ", prompt).map_err(QuizError::Output)?;
        self.output.flush().map_err(QuizError::Output)?;
        read_answer(&mut self.input).map_err(QuizError::Input)
    }

    fn feedback(&mut self, verdict: &Verdict) -> Result<(), QuizError> {
        self.redraw(verdict).map_err(QuizError::Output)
    }

    fn retry(&mut self, missed: usize) -> Result<(), QuizError> {
        let ones = if missed == 1 { "one" } else { "ones" };
        writeln!(self.output).map_err(QuizError::Output)?;
        writeln!(self.output, "Let's try the {} you missed again.", ones).map_err(QuizError::Output)?;
        self.output.flush().map_err(QuizError::Output)
    }
}
