//! Error types for a game run.
//!
//! Every variant is raised before a quiz session exists (or by the input
//! source feeding it); guess processing itself never fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The missing-word count is not strictly below the total word count.
    #[error("number of words {words} needs to be bigger than missing words {missing}")]
    Configuration { words: usize, missing: usize },

    /// Nothing left to sample from once possessives were filtered out.
    #[error("lexicon is empty, no word can be sampled")]
    EmptyLexicon,

    #[error("could not find the dict file in {}", .0.display())]
    DictNotFound(PathBuf),

    #[error("could not read dict file {} as it is a directory", .0.display())]
    DictIsDirectory(PathBuf),

    #[error("could not read dict file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("built-in lexicon unavailable: {0}")]
    BuiltinLexicon(String),

    /// Reading a guess or writing to the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

impl GameError {
    /// Returns `true` for errors caused by the configured counts rather than the environment.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GameError::Configuration { .. })
    }
}
