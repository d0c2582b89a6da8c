//! Per-letter feedback for a guess
//!
//! Each position of a guess is labelled:
//! - `Absent` (gray): letter not in the target, or all copies already used
//! - `Present` (yellow): letter in the target, wrong position
//! - `Correct` (green): letter in the correct position

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Label for a single letter of a guess
///
/// Ordered so that a better-known state compares greater:
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase label as used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One position of the feedback: the guessed letter and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: char,
    pub state: LetterState,
}

/// Feedback for a whole guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (correct) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position from remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let target = Word::new("speed").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.states(), [
    ///     LetterState::Present,
    ///     LetterState::Absent,
    ///     LetterState::Absent,
    ///     LetterState::Present,
    ///     LetterState::Present,
    /// ]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut target_available = target.letter_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = LetterState::Correct;

                if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but a copy of the letter is still unused
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterState::Absent
                && let Some(count) = target_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        let letters = std::array::from_fn(|i| LetterFeedback {
            letter: char::from(guess.char_at(i)),
            state: result[i],
        });

        Self(letters)
    }

    /// The `(letter, label)` pairs in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Only the labels, in guess order
    #[must_use]
    pub fn states(&self) -> [LetterState; WORD_LENGTH] {
        self.0.map(|lf| lf.state)
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|lf| lf.state == LetterState::Correct)
    }

    /// Count the positions carrying the given label
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|lf| lf.state == state).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &target).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|lf| lf.state.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
