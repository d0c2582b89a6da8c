//! The shared word repository
//!
//! Built once at startup and borrowed by every game session. Nothing in here
//! mutates after construction.

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::error::{EmptyPoolError, LoadError, WordError};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// Day number (counted from 0001-01-01 as day 1) of the first daily puzzle,
/// 2021-06-19.
const DAILY_EPOCH_DAYS_FROM_CE: i64 = 737_960;

/// Answer pool plus the set of every acceptable guess
#[derive(Debug, Clone)]
pub struct WordRepository {
    answers: Vec<Word>,
    allowed: Vec<Word>,
    valid: FxHashSet<String>,
}

impl WordRepository {
    /// Load the answer and allowed-guess lists from two files
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if either file is unreadable, empty, or has an
    /// entry that is not a 5-letter word.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        answers_path: P,
        allowed_path: Q,
    ) -> Result<Self, LoadError> {
        let answers = load_from_file(answers_path.as_ref())?;
        let allowed = load_from_file(allowed_path.as_ref())?;

        debug!(
            answers = answers.len(),
            allowed = allowed.len(),
            "loaded word lists from disk"
        );

        Ok(Self::from_parts(answers, allowed))
    }

    /// Repository over the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_parts(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Build a repository from in-memory word lists
    ///
    /// Unlike [`WordRepository::load`] this accepts an empty answer pool; the
    /// failure then surfaces from [`WordRepository::random_target`].
    ///
    /// # Errors
    ///
    /// Returns the first `WordError` among the given words.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordRepository;
    ///
    /// let repo = WordRepository::from_words(&["crate"], &["zzzzz"]).unwrap();
    /// assert!(repo.is_valid_word("CRATE"));
    /// assert!(repo.is_valid_word("zzzzz"));
    /// assert!(!repo.is_valid_word("board"));
    /// ```
    pub fn from_words<S: AsRef<str>>(answers: &[S], allowed: &[S]) -> Result<Self, WordError> {
        let parse = |words: &[S]| -> Result<Vec<Word>, WordError> {
            words.iter().map(|w| Word::new(w.as_ref())).collect()
        };

        Ok(Self::from_parts(parse(answers)?, parse(allowed)?))
    }

    fn from_parts(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let valid = answers
            .iter()
            .chain(&allowed)
            .map(|w| w.text().to_string())
            .collect();

        Self {
            answers,
            allowed,
            valid,
        }
    }

    /// Uniformly random target drawn from the answer pool
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if there are no answers.
    pub fn random_target(&self) -> Result<&Word, EmptyPoolError> {
        self.random_target_with(&mut rand::rng())
    }

    /// Same as [`WordRepository::random_target`] with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if there are no answers.
    pub fn random_target_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, EmptyPoolError> {
        self.answers.choose(rng).ok_or(EmptyPoolError)
    }

    /// Deterministic target for a calendar day
    ///
    /// Walks the answer list in order, one word per day, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if there are no answers.
    pub fn daily_target(&self, date: NaiveDate) -> Result<&Word, EmptyPoolError> {
        if self.answers.is_empty() {
            return Err(EmptyPoolError);
        }

        let days = i64::from(date.num_days_from_ce()) - DAILY_EPOCH_DAYS_FROM_CE;
        let len = i64::try_from(self.answers.len()).unwrap_or(i64::MAX);
        let index = usize::try_from(days.rem_euclid(len)).unwrap_or(0);
        Ok(&self.answers[index])
    }

    /// Case-insensitive check against answers and allowed guesses
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid.contains(&word.to_lowercase())
    }

    /// Membership check for an already validated word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word.text())
    }

    /// Words that can be drawn as targets
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words that are accepted as guesses only
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Number of distinct valid guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}
