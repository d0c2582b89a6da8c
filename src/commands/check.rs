//! Evaluate a single guess against a chosen target

use crate::core::{Feedback, Word};
use crate::game::GameSession;
use crate::wordlists::WordRepository;
use anyhow::{Context, Result};

/// Feedback `guess` would earn against `target`
///
/// The guess goes through the same validation as in a game, so it must be a
/// known word; the target only has to be a well-formed word.
///
/// # Errors
///
/// Returns an error if the target is malformed or the guess is rejected.
pub fn check_guess(words: &WordRepository, guess: &str, target: &str) -> Result<Feedback> {
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let mut session = GameSession::new(words, target);

    let outcome = session
        .submit_guess(guess)
        .with_context(|| format!("cannot check '{guess}'"))?;
    Ok(outcome.feedback)
}
