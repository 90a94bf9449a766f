use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::time::Duration;

/// Source of player guesses, one line at a time.
pub trait GuessSource {
    /// Block until the next guess is available.
    /// Returns Ok(None) once the input is exhausted.
    fn next_guess(&mut self) -> io::Result<Option<String>>;
}

/// Production source reading trimmed lines from any buffered reader
pub struct LineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> GuessSource for LineSource<R> {
    fn next_guess(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Test source replaying a fixed list of guesses
#[derive(Debug, Default)]
pub struct ScriptedSource {
    guesses: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guesses: guesses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl GuessSource for ScriptedSource {
    fn next_guess(&mut self) -> io::Result<Option<String>> {
        Ok(self.guesses.pop_front())
    }
}

/// The wait between showing the full list and hiding words
pub trait Pause {
    fn wait(&self, duration: Duration);
}

/// Blocks the current thread for the whole duration
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPause;

impl Pause for SleepPause {
    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately, for headless runs
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn wait(&self, _duration: Duration) {}
}
