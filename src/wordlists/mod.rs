//! Word lists for the game
//!
//! Embedded lists compiled into the binary, loaders for custom lists, and the
//! [`WordRepository`] shared by every game session.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use repository::WordRepository;
