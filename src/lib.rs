//! Wordle Game
//!
//! A Wordle-style guessing game: word lists, per-letter feedback with
//! standard duplicate-letter rules, game sessions, persisted statistics, and
//! TUI and text front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::LetterState;
//! use wordle_game::game::{GameSession, GameState};
//! use wordle_game::wordlists::WordRepository;
//!
//! let words = WordRepository::from_words(&["speed"], &["erase"]).unwrap();
//! let mut session = GameSession::new(&words, "speed".parse().unwrap());
//!
//! let outcome = session.submit_guess("erase").unwrap();
//! assert_eq!(outcome.feedback.states()[0], LetterState::Present);
//! assert_eq!(outcome.state, GameState::InProgress);
//!
//! let outcome = session.submit_guess("SPEED").unwrap();
//! assert_eq!(outcome.state, GameState::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions and keyboard tracking
pub mod game;

// Word lists
pub mod wordlists;

// Persisted statistics
pub mod stats;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
