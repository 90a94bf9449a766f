use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::fs;
use std::path::Path;

use super::filter::filter_possessives;
use crate::error::GameError;

static LANG_DIR: Dir = include_dir!("src/lang");

const BUILTIN_FILE: &str = "english.json";

/// The filtered candidate word list a game samples from.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Lexicon {
    name: String,
    words: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from raw lines, dropping possessive entries.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            words: filter_possessives(lines),
        }
    }

    /// Read a newline separated dictionary such as `/usr/share/dict/american-english`.
    pub fn from_dict_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();

        let meta = fs::metadata(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => GameError::DictNotFound(path.to_path_buf()),
            _ => GameError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        })?;
        if meta.is_dir() {
            return Err(GameError::DictIsDirectory(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let lexicon = Self::from_lines(
            name,
            content.lines().filter(|line| !line.trim().is_empty()),
        );
        tracing::debug!(
            path = %path.display(),
            words = lexicon.len(),
            "loaded dictionary"
        );
        Ok(lexicon)
    }

    /// The English word list compiled into the binary.
    pub fn builtin() -> Result<Self, GameError> {
        let file = LANG_DIR
            .get_file(BUILTIN_FILE)
            .ok_or_else(|| GameError::BuiltinLexicon(format!("{BUILTIN_FILE} not embedded")))?;

        let file_as_str = file
            .contents_utf8()
            .ok_or_else(|| GameError::BuiltinLexicon("not valid utf-8".to_string()))?;

        let raw: Lexicon =
            from_str(file_as_str).map_err(|err| GameError::BuiltinLexicon(err.to_string()))?;

        Ok(Self::from_lines(raw.name, raw.words))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
