//! Core domain types for Wordle
//!
//! Words and the per-letter feedback rules. Everything here is pure and has
//! no knowledge of sessions, word lists or front ends.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterState};
pub use word::{WORD_LENGTH, Word};
