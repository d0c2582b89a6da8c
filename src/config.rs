//! Runtime configuration shared by the front ends

use crate::core::Word;
use crate::error::EmptyPoolError;
use crate::game::{DEFAULT_MAX_ATTEMPTS, GameSession};
use crate::wordlists::WordRepository;
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default location of the statistics file
pub const DEFAULT_STATS_PATH: &str = "data/statistics.json";

/// Settings for a run of games
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_attempts: NonZeroUsize,
    /// Seed for target selection; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Make the first game of the run the puzzle of the day
    pub daily: bool,
    pub stats_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            daily: false,
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

impl GameConfig {
    /// Target picker for this configuration
    #[must_use]
    pub fn targets(&self) -> TargetPicker {
        let rng = self
            .seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

        TargetPicker {
            rng,
            daily: self.daily.then(|| Local::now().date_naive()),
        }
    }
}

/// Chooses the target of each new game
#[derive(Debug)]
pub struct TargetPicker {
    rng: StdRng,
    daily: Option<NaiveDate>,
}

impl TargetPicker {
    /// Picker that always draws at random from a seeded RNG
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            daily: None,
        }
    }

    /// Picker whose first target is the puzzle for `date`
    #[must_use]
    pub fn daily(date: NaiveDate, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            daily: Some(date),
        }
    }

    /// Next target: the daily word once if configured, then random answers
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the repository has no answers.
    pub fn next_target(&mut self, words: &WordRepository) -> Result<Word, EmptyPoolError> {
        let target = match self.daily.take() {
            Some(date) => words.daily_target(date)?,
            None => words.random_target_with(&mut self.rng)?,
        };
        Ok(target.clone())
    }

    /// Start a fresh session with the next target
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the repository has no answers.
    pub fn new_session<'a>(
        &mut self,
        words: &'a WordRepository,
        max_attempts: NonZeroUsize,
    ) -> Result<GameSession<'a>, EmptyPoolError> {
        let target = self.next_target(words)?;
        Ok(GameSession::with_max_attempts(words, target, max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> WordRepository {
        WordRepository::from_words(&["crate", "board", "speed"], &["zzzzz"]).unwrap()
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts.get(), 6);
        assert_eq!(config.stats_path, PathBuf::from(DEFAULT_STATS_PATH));
        assert!(!config.daily);
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let words = repo();
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };

        let mut a = config.targets();
        let mut b = config.targets();
        for _ in 0..10 {
            assert_eq!(
                a.next_target(&words).unwrap(),
                b.next_target(&words).unwrap()
            );
        }
    }

    #[test]
    fn daily_applies_to_first_game_only() {
        let words = repo();
        let epoch = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
        let mut picker = TargetPicker::daily(epoch, 3);

        assert_eq!(picker.next_target(&words).unwrap().text(), "crate");
        for _ in 0..5 {
            assert!(words.answers().contains(&picker.next_target(&words).unwrap()));
        }
    }

    #[test]
    fn new_session_uses_attempt_limit() {
        let words = repo();
        let mut picker = TargetPicker::seeded(1);
        let session = picker
            .new_session(&words, NonZeroUsize::new(3).unwrap())
            .unwrap();

        assert_eq!(session.max_attempts(), 3);
        assert!(words.answers().contains(session.target()));
    }

    #[test]
    fn empty_pool_is_reported() {
        let empty: [&str; 0] = [];
        let words = WordRepository::from_words(&empty, &["zzzzz"]).unwrap();

        assert!(TargetPicker::seeded(1).next_target(&words).is_err());
    }
}
