//! Game sessions
//!
//! Per-game mutable state: attempts, win/loss detection and keyboard
//! knowledge. Front ends drive a [`GameSession`] and render what it reports.

mod keyboard;
mod session;

pub use keyboard::KeyboardState;
pub use session::{Attempt, DEFAULT_MAX_ATTEMPTS, GameSession, GameState, GuessOutcome};
