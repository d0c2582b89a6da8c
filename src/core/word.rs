//! Wordle word representation
//!
//! A Word stores a validated, lowercase 5-letter word.

use crate::error::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter lowercase Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is lowercased. Checks run
    /// in a fixed order so the first failure is the one reported.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - Length is not exactly 5 characters
    /// - Contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new(" Crate ").unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cr4te").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let length = trimmed.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                expected: WORD_LENGTH,
                actual: length,
            });
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        let text = trimmed.to_ascii_lowercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
