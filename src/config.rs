use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dirs::AppDirs;
use crate::error::GameError;

pub const DEFAULT_DICT_PATH: &str = "/usr/share/dict/american-english";

/// Validated counts for one game run.
///
/// Construction is the only place the counts are checked; the pool
/// builder and the quiz session trust them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    number_of_words: usize,
    missing_words: usize,
    memorize_secs: u64,
}

impl GameConfig {
    pub fn new(
        number_of_words: usize,
        missing_words: usize,
        memorize_secs: u64,
    ) -> Result<Self, GameError> {
        if missing_words >= number_of_words {
            return Err(GameError::Configuration {
                words: number_of_words,
                missing: missing_words,
            });
        }
        Ok(Self {
            number_of_words,
            missing_words,
            memorize_secs,
        })
    }

    pub fn number_of_words(&self) -> usize {
        self.number_of_words
    }

    pub fn missing_words(&self) -> usize {
        self.missing_words
    }

    pub fn memorize_secs(&self) -> u64 {
        self.memorize_secs
    }

    pub fn memorize_duration(&self) -> Duration {
        Duration::from_secs(self.memorize_secs)
    }
}

/// Stored defaults, overridden by command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub number_of_words: usize,
    pub missing_words: usize,
    pub memorize_secs: u64,
    pub dict_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_words: 10,
            missing_words: 2,
            memorize_secs: 30,
            dict_path: PathBuf::from(DEFAULT_DICT_PATH),
        }
    }
}

impl Settings {
    pub fn game_config(&self) -> Result<GameConfig, GameError> {
        GameConfig::new(self.number_of_words, self.missing_words, self.memorize_secs)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("recall_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Settings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Settings::default(),
        };
        match serde_json::from_slice::<Settings>(&bytes) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring unreadable config, using defaults"
                );
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(settings)?;
        fs::write(&self.path, data)
    }
}
