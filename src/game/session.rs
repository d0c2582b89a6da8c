//! One round of the game
//!
//! A `GameSession` owns its attempts and borrows the shared
//! [`WordRepository`]. Every guess is validated completely before anything is
//! recorded, so a rejected guess never leaves a trace.

use super::KeyboardState;
use crate::core::{Feedback, Word};
use crate::error::{EmptyPoolError, GuessError, InvalidGuess};
use crate::wordlists::WordRepository;
use rand::Rng;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Attempts allowed in a standard game
pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(6).unwrap();

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// `Won` and `Lost` are final
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// An accepted guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Per-letter feedback, in guess order
    pub feedback: Feedback,
    /// Session state after this guess
    pub state: GameState,
    /// 1-based number of this attempt
    pub attempt: usize,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    words: &'a WordRepository,
    target: Word,
    attempts: Vec<Attempt>,
    max_attempts: NonZeroUsize,
    state: GameState,
    keyboard: KeyboardState,
}

impl<'a> GameSession<'a> {
    /// Start a standard six-attempt game against `target`
    #[must_use]
    pub fn new(words: &'a WordRepository, target: Word) -> Self {
        Self::with_max_attempts(words, target, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a game with a custom attempt limit
    #[must_use]
    pub fn with_max_attempts(
        words: &'a WordRepository,
        target: Word,
        max_attempts: NonZeroUsize,
    ) -> Self {
        debug!(max_attempts = max_attempts.get(), "new game session");

        Self {
            words,
            target,
            attempts: Vec::with_capacity(max_attempts.get()),
            max_attempts,
            state: GameState::InProgress,
            keyboard: KeyboardState::new(),
        }
    }

    /// Start a game against a random answer
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the repository has no answers.
    pub fn random<R: Rng + ?Sized>(
        words: &'a WordRepository,
        max_attempts: NonZeroUsize,
        rng: &mut R,
    ) -> Result<Self, EmptyPoolError> {
        let target = words.random_target_with(rng)?.clone();
        Ok(Self::with_max_attempts(words, target, max_attempts))
    }

    /// Submit a guess
    ///
    /// Checks, in order: the game is still running, the guess is non-empty,
    /// has the target's length, is purely alphabetic, and is a known word.
    /// The first failing check is reported and the session is left unchanged.
    ///
    /// # Errors
    ///
    /// - `GuessError::SessionOver` once the game has been won or lost
    /// - `GuessError::Invalid` with reason `empty`, `length`, `non-alpha` or
    ///   `not-in-dictionary`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameSession, GameState};
    /// use wordle_game::wordlists::WordRepository;
    ///
    /// let words = WordRepository::from_words(&["crate"], &["board"]).unwrap();
    /// let mut game = GameSession::new(&words, Word::new("crate").unwrap());
    ///
    /// let outcome = game.submit_guess("board").unwrap();
    /// assert_eq!(outcome.state, GameState::InProgress);
    ///
    /// let outcome = game.submit_guess("CRATE").unwrap();
    /// assert_eq!(outcome.state, GameState::Won);
    /// assert!(game.submit_guess("board").is_err());
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::SessionOver);
        }

        let guess = Word::new(raw).map_err(InvalidGuess::from)?;
        if !self.words.contains(&guess) {
            return Err(InvalidGuess::NotInDictionary(guess.text().to_string()).into());
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        debug!(guess = guess.text(), feedback = %feedback, "guess accepted");

        self.keyboard.record(&feedback);
        self.attempts.push(Attempt { guess, feedback });

        self.state = if feedback.is_perfect() {
            GameState::Won
        } else if self.attempts.len() >= self.max_attempts.get() {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        if self.state.is_terminal() {
            info!(
                state = %self.state,
                attempts = self.attempts.len(),
                "game finished"
            );
        }

        Ok(GuessOutcome {
            feedback,
            state: self.state,
            attempt: self.attempts.len(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Guesses left before the game is lost; 0 once the game is over
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        if self.is_over() {
            0
        } else {
            self.max_attempts.get() - self.attempts.len()
        }
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts.get()
    }

    /// Best-known state of each guessed letter
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The repository this session validates guesses against
    #[must_use]
    pub const fn words(&self) -> &'a WordRepository {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};
    use crate::error::WordError;

    fn repo() -> WordRepository {
        WordRepository::from_words(
            &["crate", "board", "speed"],
            &[
                "erase", "zzzzz", "slate", "crane", "trace", "react", "cater", "caret",
            ],
        )
        .unwrap()
    }

    fn session<'a>(words: &'a WordRepository, target: &str) -> GameSession<'a> {
        GameSession::new(words, Word::new(target).unwrap())
    }

    #[test]
    fn new_session_is_in_progress() {
        let words = repo();
        let game = session(&words, "crate");

        assert_eq!(game.state(), GameState::InProgress);
        assert!(!game.is_over());
        assert!(!game.is_won());
        assert_eq!(game.remaining_attempts(), 6);
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn winning_guess() {
        let words = repo();
        let mut game = session(&words, "crate");

        let outcome = game.submit_guess("crate").unwrap();

        assert_eq!(outcome.state, GameState::Won);
        assert_eq!(outcome.attempt, 1);
        assert_eq!(outcome.feedback.states(), [Correct; 5]);
        assert!(game.is_won());
        assert!(game.is_over());
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn winning_guess_ignores_case() {
        let words = repo();
        let mut game = session(&words, "crate");

        assert_eq!(game.submit_guess("CrAtE").unwrap().state, GameState::Won);
        assert_eq!(game.attempts()[0].guess.text(), "crate");
    }

    #[test]
    fn duplicate_letters_feedback() {
        let words = repo();
        let mut game = session(&words, "speed");

        let outcome = game.submit_guess("erase").unwrap();

        assert_eq!(
            outcome.feedback.states(),
            [Present, Absent, Absent, Present, Present]
        );
        assert_eq!(outcome.state, GameState::InProgress);
    }

    #[test]
    fn all_absent_feedback() {
        let words = repo();
        let mut game = session(&words, "board");

        let outcome = game.submit_guess("zzzzz").unwrap();
        assert_eq!(outcome.feedback.states(), [Absent; 5]);
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let words = repo();
        let mut game = session(&words, "crate");

        let err = game.submit_guess("ab").unwrap_err();

        assert_eq!(
            err,
            GuessError::Invalid(InvalidGuess::Malformed(WordError::InvalidLength {
                expected: 5,
                actual: 2
            }))
        );
        assert_eq!(err.reason(), Some("length"));
        assert!(game.attempts().is_empty());
        assert_eq!(game.remaining_attempts(), 6);
    }

    #[test]
    fn validation_reasons_in_order() {
        let words = repo();
        let mut game = session(&words, "crate");

        assert_eq!(game.submit_guess("").unwrap_err().reason(), Some("empty"));
        assert_eq!(game.submit_guess("  ").unwrap_err().reason(), Some("empty"));
        assert_eq!(game.submit_guess("ab").unwrap_err().reason(), Some("length"));
        assert_eq!(
            game.submit_guess("cr4te").unwrap_err().reason(),
            Some("non-alpha")
        );
        assert_eq!(
            game.submit_guess("qwert").unwrap_err().reason(),
            Some("not-in-dictionary")
        );
        assert!(game.attempts().is_empty());
        assert_eq!(game.keyboard(), &KeyboardState::new());
    }

    #[test]
    fn six_misses_lose_the_game() {
        let words = repo();
        let mut game = session(&words, "board");

        let misses = ["crate", "slate", "crane", "trace", "react", "cater"];
        for (i, guess) in misses.iter().enumerate() {
            let outcome = game.submit_guess(guess).unwrap();
            assert_eq!(outcome.attempt, i + 1);
            if i < 5 {
                assert_eq!(outcome.state, GameState::InProgress);
                assert_eq!(game.remaining_attempts(), 5 - i);
            } else {
                assert_eq!(outcome.state, GameState::Lost);
            }
        }

        assert_eq!(game.state(), GameState::Lost);
        assert!(game.is_over());
        assert!(!game.is_won());
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let words = repo();
        let mut game = session(&words, "board");

        for guess in ["crate", "slate", "crane", "trace", "react"] {
            game.submit_guess(guess).unwrap();
        }
        assert_eq!(game.submit_guess("board").unwrap().state, GameState::Won);
    }

    #[test]
    fn guesses_after_game_over_are_rejected() {
        let words = repo();
        let mut game = session(&words, "crate");
        game.submit_guess("crate").unwrap();

        for guess in ["board", "", "ab", "qwert"] {
            assert_eq!(game.submit_guess(guess), Err(GuessError::SessionOver));
        }
        assert_eq!(game.attempts().len(), 1);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn queries_are_idempotent() {
        let words = repo();
        let mut game = session(&words, "crate");
        game.submit_guess("slate").unwrap();

        for _ in 0..3 {
            assert!(!game.is_over());
            assert!(!game.is_won());
            assert_eq!(game.remaining_attempts(), 5);
        }
    }

    #[test]
    fn target_never_changes() {
        let words = repo();
        let mut game = session(&words, "crate");

        for guess in ["slate", "ab", "board"] {
            let _ = game.submit_guess(guess);
            assert_eq!(game.target().text(), "crate");
        }
    }

    #[test]
    fn repeated_guesses_are_allowed() {
        let words = repo();
        let mut game = session(&words, "crate");

        game.submit_guess("slate").unwrap();
        game.submit_guess("slate").unwrap();
        assert_eq!(game.attempts().len(), 2);
    }

    #[test]
    fn keyboard_tracks_attempts() {
        let words = repo();
        let mut game = session(&words, "crate");
        game.submit_guess("slate").unwrap();

        assert_eq!(game.keyboard().state_of('s'), Some(Absent));
        assert_eq!(game.keyboard().state_of('a'), Some(Correct));
    }

    #[test]
    fn custom_attempt_limit() {
        let words = repo();
        let target = Word::new("crate").unwrap();
        let mut game = GameSession::with_max_attempts(&words, target, NonZeroUsize::MIN);

        assert_eq!(game.max_attempts(), 1);
        assert_eq!(game.submit_guess("slate").unwrap().state, GameState::Lost);
        assert_eq!(game.submit_guess("crate"), Err(GuessError::SessionOver));
    }

    #[test]
    fn random_session_draws_from_answers() {
        use rand::SeedableRng;

        let words = repo();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let game = GameSession::random(&words, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();

        assert!(words.answers().contains(game.target()));
    }

    #[test]
    fn random_session_on_empty_pool_fails() {
        let empty: [&str; 0] = [];
        let words = WordRepository::from_words(&empty, &["crate"]).unwrap();

        assert!(GameSession::random(&words, DEFAULT_MAX_ATTEMPTS, &mut rand::rng()).is_err());
    }
}
