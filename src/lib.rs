// Library surface for headless/integration tests and reuse.
// The binary in main.rs only parses flags and wires these together.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod lexicon;
pub mod matcher;
pub mod runtime;
pub mod session;
pub mod shuffle;
pub mod ui;

pub use config::GameConfig;
pub use error::GameError;
pub use lexicon::{Lexicon, WordPool};
pub use session::{Ending, GuessOutcome, Phase, QuizSession, Report};
