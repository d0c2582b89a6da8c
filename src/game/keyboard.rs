//! Best-known state of every letter, for colouring an on-screen keyboard

use crate::core::{Feedback, LetterState};

/// Per-letter knowledge accumulated over a game
///
/// A letter's state only ever improves: once a letter has been seen as
/// `Correct` a later `Present` or `Absent` for it is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterState>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the keyboard
    pub fn record(&mut self, feedback: &Feedback) {
        for lf in feedback.letters() {
            if let Some(slot) = Self::index(lf.letter).map(|i| &mut self.letters[i]) {
                *slot = Some(slot.map_or(lf.state, |known| known.max(lf.state)));
            }
        }
    }

    /// Best state seen for a letter, `None` if it has not been guessed
    ///
    /// Letters are matched case-insensitively.
    #[must_use]
    pub fn state_of(&self, letter: char) -> Option<LetterState> {
        Self::index(letter).and_then(|i| self.letters[i])
    }

    /// Forget everything, for a new game
    pub fn clear(&mut self) {
        self.letters = [None; 26];
    }

    fn index(letter: char) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| (lower as u8 - b'a') as usize)
    }
}
