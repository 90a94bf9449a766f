use crossterm::{
    cursor::MoveTo,
    queue,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::session::{GuessOutcome, Report, EXIT_COMMAND};

const MIN_SEPARATOR_WIDTH: usize = 37;

/// Line based renderer for the game's three screens.
pub struct Screen<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Screen<W> {
    /// Terminal screen: clears between phases and colours feedback.
    pub fn new(out: W) -> Self {
        Self { out, styled: true }
    }

    /// No escape sequences at all, for pipes and tests.
    pub fn plain(out: W) -> Self {
        Self { out, styled: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.styled {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.flush()
    }

    pub fn show_memorize(&mut self, words: &[String], secs: u64) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "You have {secs} seconds to remember the words")?;
        self.word_list(words)?;
        self.out.flush()
    }

    pub fn show_guessing(&mut self, words: &[String], missing: usize) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "What are the {missing} missing words?")?;
        self.word_list(words)?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Missing word ({EXIT_COMMAND} for exiting) > ")?;
        self.out.flush()
    }

    pub fn acknowledge(&mut self, outcome: GuessOutcome) -> io::Result<()> {
        match outcome {
            GuessOutcome::Correct => self.feedback("Awesome!", true)?,
            GuessOutcome::Completed => {
                self.feedback("Awesome!", true)?;
                self.feedback("Got them all!", true)?;
            }
            GuessOutcome::Repeat => self.feedback("Already got that one.", false)?,
            GuessOutcome::Incorrect => self.feedback("Nope, try again.", false)?,
            GuessOutcome::ExitRequested | GuessOutcome::Ignored => {}
        }
        self.out.flush()
    }

    pub fn show_report(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.out, "Score: {}/{}", report.score, report.total)?;
        if let Some(ref words) = report.missing_words {
            writeln!(self.out, "Missing words were: ")?;
            for word in words {
                writeln!(self.out, "-> {word}")?;
            }
        }
        self.out.flush()
    }

    fn word_list(&mut self, words: &[String]) -> io::Result<()> {
        let width = words
            .iter()
            .map(|w| w.width())
            .max()
            .unwrap_or(0)
            .max(MIN_SEPARATOR_WIDTH);
        let separator = "=".repeat(width);

        writeln!(self.out, "{separator}")?;
        for word in words {
            writeln!(self.out, "{word}")?;
        }
        writeln!(self.out, "{separator}")
    }

    fn feedback(&mut self, text: &str, good: bool) -> io::Result<()> {
        match (self.styled, good) {
            (false, _) => writeln!(self.out, "{text}"),
            (true, true) => writeln!(self.out, "{}", text.green().bold()),
            (true, false) => writeln!(self.out, "{}", text.red()),
        }
    }
}
