use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use recall::{
    config::{ConfigStore, FileConfigStore, Settings},
    game,
    runtime::{LineSource, SleepPause},
    ui::Screen,
    GameError, Lexicon,
};
use std::{error::Error, io, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

/// memorize a list of words, then name the ones that vanished
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A memory trainer: a list of random words is shown for a while, then some of them disappear and you have to recall which."
)]
pub struct Cli {
    /// total number of words to memorize
    #[clap(short = 'w', long = "words")]
    number_of_words: Option<usize>,

    /// number of words that will disappear from the original list
    #[clap(short = 'm', long = "missing")]
    missing_words: Option<usize>,

    /// number of seconds available for memorizing the words
    #[clap(short = 't', long = "time")]
    memorize_secs: Option<u64>,

    /// dictionary file to sample words from, one word per line
    #[clap(short = 'd', long = "dict", conflicts_with = "builtin")]
    dict_path: Option<PathBuf>,

    /// use the built-in english word list instead of a dictionary file
    #[clap(long)]
    builtin: bool,

    /// seed the random generator for a reproducible game
    #[clap(long)]
    seed: Option<u64>,

    /// read and write settings at this path instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// remember the effective settings as new defaults
    #[clap(long)]
    save: bool,
}

impl Cli {
    /// Stored settings with any command-line overrides applied
    fn apply(&self, stored: Settings) -> Settings {
        Settings {
            number_of_words: self.number_of_words.unwrap_or(stored.number_of_words),
            missing_words: self.missing_words.unwrap_or(stored.missing_words),
            memorize_secs: self.memorize_secs.unwrap_or(stored.memorize_secs),
            dict_path: self.dict_path.clone().unwrap_or(stored.dict_path),
        }
    }

    fn store(&self) -> FileConfigStore {
        match self.config {
            Some(ref path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recall=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        if e
            .downcast_ref::<GameError>()
            .is_some_and(GameError::is_configuration)
        {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::ArgumentConflict, e).exit();
        }
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let store = cli.store();
    let settings = cli.apply(store.load());
    let config = settings.game_config()?;

    let lexicon = if cli.builtin {
        Lexicon::builtin()?
    } else {
        Lexicon::from_dict_file(&settings.dict_path)?
    };

    if cli.save {
        store.save(&settings)?;
        tracing::info!(path = %store.path().display(), "settings saved");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut screen = if stdout.is_tty() {
        Screen::new(stdout.lock())
    } else {
        Screen::plain(stdout.lock())
    };
    let mut source = LineSource::stdin();

    game::play(
        &config,
        &lexicon,
        &mut rng,
        &mut source,
        &SleepPause,
        &mut screen,
    )?;

    Ok(())
}
