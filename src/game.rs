//! One complete game run.
//!
//! Wires the pool builder, the quiz session and the collaborators that
//! show words, wait, and read guesses.

use rand::Rng;
use std::io::Write;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::lexicon::{Lexicon, WordPool};
use crate::runtime::{GuessSource, Pause};
use crate::session::{QuizSession, Report, EXIT_COMMAND};
use crate::shuffle::shuffle;
use crate::ui::Screen;

pub fn play<R, S, P, W>(
    config: &GameConfig,
    lexicon: &Lexicon,
    rng: &mut R,
    source: &mut S,
    pause: &P,
    screen: &mut Screen<W>,
) -> Result<Report, GameError>
where
    R: Rng + ?Sized,
    S: GuessSource,
    P: Pause,
    W: Write,
{
    let mut pool = WordPool::build(lexicon, config, rng)?;
    shuffle(pool.words_mut(), rng);

    let mut session = QuizSession::new(pool, config)?;
    tracing::info!(
        words = config.number_of_words(),
        missing = config.missing_words(),
        secs = config.memorize_secs(),
        "memorizing"
    );

    screen.show_memorize(session.visible_words(), config.memorize_secs())?;
    pause.wait(config.memorize_duration());

    session.reveal(rng);
    screen.show_guessing(session.visible_words(), session.missing_count())?;

    while !session.has_finished() {
        screen.prompt()?;
        let guess = match source.next_guess()? {
            Some(guess) => guess,
            None => {
                tracing::debug!("input closed, leaving");
                EXIT_COMMAND.to_string()
            }
        };
        let outcome = session.submit_guess(&guess);
        screen.acknowledge(outcome)?;
    }

    match session.report() {
        Some(report) => {
            screen.show_report(&report)?;
            Ok(report)
        }
        None => unreachable!("guess loop exits only once the session has finished"),
    }
}
