use rand::Rng;

use super::core::Lexicon;
use crate::config::GameConfig;
use crate::error::GameError;

/// The fixed-size sample of words chosen for one game run.
///
/// Words are drawn independently with replacement, so the same word may
/// appear more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Draw `config.number_of_words()` words uniformly at random from `lexicon`.
    pub fn build<R: Rng + ?Sized>(
        lexicon: &Lexicon,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Self::sample(lexicon, config.number_of_words(), rng)
    }

    /// Draw `count` words uniformly at random, with replacement.
    pub fn sample<R: Rng + ?Sized>(
        lexicon: &Lexicon,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if lexicon.is_empty() {
            return Err(GameError::EmptyLexicon);
        }

        let words = (0..count)
            .map(|_| lexicon.words()[rng.gen_range(0..lexicon.len())].clone())
            .collect();
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [String] {
        &mut self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
