//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// A guessed letter as a coloured tile, e.g. ` C ` on green
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black().bold(),
    }
}

/// A whole guess as a row of coloured tiles
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .map(|lf| letter_tile(lf.letter, lf.state).to_string())
        .collect()
}

/// Emoji grid of a game, one line per attempt
#[must_use]
pub fn emoji_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| a.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
