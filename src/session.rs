use itertools::Itertools;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::lexicon::WordPool;
use crate::matcher::find_match;
use crate::shuffle::shuffle;

/// Typed by the player to give up on the remaining words.
pub const EXIT_COMMAND: &str = "BYE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Memorizing,
    Guessing,
    Finished,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Ending {
    Completed,
    Quit,
}

/// Acknowledgment for one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Matched a word still to be recalled.
    Correct,
    /// Matched the last outstanding word; the session is now finished.
    Completed,
    /// A missing word whose every occurrence was already credited.
    Repeat,
    Incorrect,
    ExitRequested,
    /// The session is not in its guessing phase.
    Ignored,
}

/// Final result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: usize,
    pub total: usize,
    pub ending: Ending,
    /// The answers, only present when the player did not recall all of them.
    pub missing_words: Option<Vec<String>>,
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.score == self.total
    }
}

/// State of one memorize / reveal / guess round.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pool: Vec<String>,
    visible_words: Vec<String>,
    missing_words: Vec<String>,
    remaining_to_guess: Vec<String>,
    missing_count: usize,
    score: usize,
    phase: Phase,
    ending: Option<Ending>,
}

impl QuizSession {
    /// Start a session in the memorizing phase, showing the whole pool.
    ///
    /// `pool` is expected to already be shuffled for presentation and to
    /// hold exactly `config.number_of_words()` words.
    pub fn new(pool: WordPool, config: &GameConfig) -> Result<Self, GameError> {
        if pool.len() != config.number_of_words() {
            return Err(GameError::Configuration {
                words: pool.len(),
                missing: config.missing_words(),
            });
        }
        let pool = pool.into_words();
        Ok(Self {
            visible_words: pool.clone(),
            pool,
            missing_words: Vec::new(),
            remaining_to_guess: Vec::new(),
            missing_count: config.missing_words(),
            score: 0,
            phase: Phase::Memorizing,
            ending: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible_words(&self) -> &[String] {
        &self.visible_words
    }

    pub fn missing_words(&self) -> &[String] {
        &self.missing_words
    }

    pub fn remaining_to_guess(&self) -> &[String] {
        &self.remaining_to_guess
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn missing_count(&self) -> usize {
        self.missing_count
    }

    pub fn has_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Hide words and move on to guessing.
    ///
    /// Reshuffles the pool, then the last `missing_count` words become the
    /// answers and the rest stay visible. Does nothing outside the
    /// memorizing phase.
    pub fn reveal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[String] {
        if self.phase != Phase::Memorizing {
            tracing::debug!(phase = %self.phase, "reveal ignored");
            return &self.visible_words;
        }

        shuffle(&mut self.pool, rng);
        let split = self.pool.len() - self.missing_count;
        self.visible_words = self.pool[..split].to_vec();
        self.missing_words = self.pool[split..].to_vec();
        self.remaining_to_guess = self.missing_words.clone();

        if self.missing_count == 0 {
            self.finish(Ending::Completed);
        } else {
            self.phase = Phase::Guessing;
            tracing::info!(
                visible = self.visible_words.len(),
                missing = self.missing_count,
                "guessing started"
            );
        }
        &self.visible_words
    }

    /// Process one trimmed guess.
    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        if self.phase != Phase::Guessing {
            return GuessOutcome::Ignored;
        }

        if guess == EXIT_COMMAND {
            self.finish(Ending::Quit);
            return GuessOutcome::ExitRequested;
        }

        let outcome = match find_match(guess, &self.remaining_to_guess) {
            Some(idx) => {
                self.remaining_to_guess.remove(idx);
                self.score += 1;
                GuessOutcome::Correct
            }
            None if self.missing_words.iter().any(|w| w == guess) => GuessOutcome::Repeat,
            None => GuessOutcome::Incorrect,
        };
        tracing::debug!(guess, ?outcome, score = self.score, "guess processed");

        if self.score == self.missing_count {
            self.finish(Ending::Completed);
            return GuessOutcome::Completed;
        }
        outcome
    }

    /// The final report, once the session has finished.
    pub fn report(&self) -> Option<Report> {
        let ending = self.ending?;
        let missing_words = (self.score != self.missing_count)
            .then(|| self.missing_words.iter().unique().cloned().collect());
        Some(Report {
            score: self.score,
            total: self.missing_count,
            ending,
            missing_words,
        })
    }

    fn finish(&mut self, ending: Ending) {
        self.phase = Phase::Finished;
        self.ending = Some(ending);
        tracing::info!(%ending, score = self.score, total = self.missing_count, "session finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::{rngs::StdRng, SeedableRng};

    fn pool(words: &[&str]) -> WordPool {
        WordPool::from(words.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    fn revealed(words: &[&str], missing: usize, seed: u64) -> QuizSession {
        let config = GameConfig::new(words.len(), missing, 0).unwrap();
        let mut session = QuizSession::new(pool(words), &config).unwrap();
        session.reveal(&mut StdRng::seed_from_u64(seed));
        session
    }

    #[test]
    fn test_new_session_is_memorizing() {
        let config = GameConfig::new(3, 1, 10).unwrap();
        let session = QuizSession::new(pool(&["a", "b", "c"]), &config).unwrap();

        assert_eq!(session.phase(), Phase::Memorizing);
        assert_eq!(session.visible_words(), &["a", "b", "c"]);
        assert!(session.missing_words().is_empty());
        assert_eq!(session.score(), 0);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_reveal_partitions_pool() {
        let words = ["cat", "dog", "fish", "bird", "lion"];
        let session = revealed(&words, 2, 5);

        assert_eq!(session.phase(), Phase::Guessing);
        assert_eq!(session.visible_words().len(), 3);
        assert_eq!(session.missing_words().len(), 2);
        assert_eq!(session.remaining_to_guess(), session.missing_words());

        let mut all: Vec<String> = session.visible_words().to_vec();
        all.extend_from_slice(session.missing_words());
        assert_eq!(
            sorted(all),
            sorted(words.iter().map(|s| s.to_string()).collect())
        );
    }

    #[test]
    fn test_reveal_only_once() {
        let mut session = revealed(&["a", "b", "c", "d"], 1, 3);
        let missing = session.missing_words().to_vec();
        let visible = session.visible_words().to_vec();

        session.reveal(&mut StdRng::seed_from_u64(77));

        assert_eq!(session.missing_words(), missing.as_slice());
        assert_eq!(session.visible_words(), visible.as_slice());
    }

    #[test]
    fn test_guessing_all_completes() {
        let mut session = revealed(&["cat", "dog", "fish", "bird", "lion"], 2, 8);
        let missing = session.missing_words().to_vec();

        // answers are accepted in any order
        assert_eq!(session.submit_guess(&missing[1]), GuessOutcome::Correct);
        assert_eq!(session.submit_guess(&missing[0]), GuessOutcome::Completed);

        assert_eq!(session.phase(), Phase::Finished);
        let report = session.report().unwrap();
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 2);
        assert_eq!(report.ending, Ending::Completed);
        assert!(report.missing_words.is_none());
        assert!(report.is_complete());
    }

    #[test]
    fn test_incorrect_guess_changes_nothing() {
        let mut session = revealed(&["cat", "dog", "fish"], 1, 2);
        let remaining = session.remaining_to_guess().to_vec();

        assert_eq!(session.submit_guess("zebra"), GuessOutcome::Incorrect);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_to_guess(), remaining.as_slice());
        assert_eq!(session.phase(), Phase::Guessing);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let mut session = revealed(&["Apple", "Berry", "Cherry"], 2, 4);
        let answer = session.missing_words()[0].to_lowercase();

        assert_eq!(session.submit_guess(&answer), GuessOutcome::Incorrect);
    }

    #[test]
    fn test_repeat_guess_scores_once() {
        let mut session = revealed(&["cat", "dog", "fish", "bird", "lion"], 2, 13);
        let first = session.missing_words()[0].clone();

        assert_eq!(session.submit_guess(&first), GuessOutcome::Correct);
        assert_eq!(session.submit_guess(&first), GuessOutcome::Repeat);
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), Phase::Guessing);
    }

    #[test]
    fn test_duplicate_missing_words_need_one_guess_each() {
        let mut session = revealed(&["echo", "echo", "echo"], 2, 21);
        assert_eq!(session.missing_words(), &["echo", "echo"]);

        assert_eq!(session.submit_guess("echo"), GuessOutcome::Correct);
        assert_eq!(session.remaining_to_guess(), &["echo"]);
        assert_eq!(session.submit_guess("echo"), GuessOutcome::Completed);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_exit_reports_missing_words() {
        let mut session = revealed(&["cat", "dog", "fish", "bird", "lion"], 2, 34);
        let missing = session.missing_words().to_vec();

        assert_eq!(session.submit_guess(&missing[0]), GuessOutcome::Correct);
        assert_eq!(session.submit_guess(EXIT_COMMAND), GuessOutcome::ExitRequested);

        let report = session.report().unwrap();
        assert_eq!(report.ending, Ending::Quit);
        assert_eq!(report.score, 1);
        assert_eq!(report.missing_words, Some(missing));
        assert!(!report.is_complete());
    }

    #[test]
    fn test_exit_immediately() {
        let mut session = revealed(&["a", "b", "c"], 2, 1);

        assert_eq!(session.submit_guess("BYE"), GuessOutcome::ExitRequested);
        let report = session.report().unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(report.missing_words.unwrap().len(), 2);
    }

    #[test]
    fn test_exit_command_is_exact() {
        let mut session = revealed(&["a", "b", "c"], 1, 1);

        assert_eq!(session.submit_guess("bye"), GuessOutcome::Incorrect);
        assert_eq!(session.phase(), Phase::Guessing);
    }

    #[test]
    fn test_report_collapses_duplicate_answers() {
        let mut session = revealed(&["echo", "echo", "echo"], 2, 5);

        session.submit_guess(EXIT_COMMAND);
        let report = session.report().unwrap();
        assert_eq!(report.missing_words, Some(vec!["echo".to_string()]));
    }

    #[test]
    fn test_guesses_ignored_outside_guessing() {
        let config = GameConfig::new(3, 1, 0).unwrap();
        let mut session = QuizSession::new(pool(&["a", "b", "c"]), &config).unwrap();
        assert_eq!(session.submit_guess("a"), GuessOutcome::Ignored);

        session.reveal(&mut StdRng::seed_from_u64(0));
        session.submit_guess(EXIT_COMMAND);
        assert_matches!(session.submit_guess("a"), GuessOutcome::Ignored);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_zero_missing_finishes_on_reveal() {
        let session = revealed(&["a", "b"], 0, 0);

        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.visible_words().len(), 2);
        let report = session.report().unwrap();
        assert_eq!(report.ending, Ending::Completed);
        assert_eq!(report.score, 0);
        assert!(report.missing_words.is_none());
    }

    #[test]
    fn test_four_words_one_missing() {
        let mut session = revealed(&["cat", "dog", "fish", "bird"], 1, 17);
        assert_eq!(session.visible_words().len(), 3);
        assert_eq!(session.missing_words().len(), 1);

        let answer = session.missing_words()[0].clone();
        assert_eq!(session.submit_guess(&answer), GuessOutcome::Completed);

        let report = session.report().unwrap();
        assert_eq!(report.score, 1);
        assert!(report.missing_words.is_none());
    }

    #[test]
    fn test_pool_size_must_match_config() {
        let config = GameConfig::new(5, 3, 0).unwrap();

        assert_matches!(
            QuizSession::new(pool(&["a"]), &config),
            Err(GameError::Configuration {
                words: 1,
                missing: 3
            })
        );
        assert_matches!(
            QuizSession::new(pool(&["a", "b", "c", "d", "e", "f"]), &config),
            Err(GameError::Configuration { .. })
        );
    }
}
