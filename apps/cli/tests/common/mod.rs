//! Shared helpers for the vocab-quiz integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod fixtures;

use std::ffi::OsStr;
use std::io::{Cursor, Write};
use std::process::{Command, Output, Stdio};

use vocab_quiz::terminal::TerminalPrompter;

/// In-memory terminal fed with `input`.
pub type TestTerminal = TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>;

pub fn terminal(input: &str) -> TestTerminal {
    TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Everything written to the in-memory terminal.
pub fn screen(terminal: TestTerminal) -> String {
    let (_, output) = terminal.into_inner();
    String::from_utf8(output).expect("terminal output is utf-8")
}

/// Run the compiled binary with `args`, piping `input` to stdin.
pub fn run_binary<I, S>(args: I, input: &str) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = Command::new(env!("CARGO_BIN_EXE_vocab-quiz"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn vocab-quiz");

    {
        let mut stdin = child.stdin.take().expect("child stdin");
        // The child may exit before reading everything.
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().expect("wait for vocab-quiz")
}
