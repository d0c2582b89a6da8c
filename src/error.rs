//! Error types for the game core
//!
//! Load failures are fatal at startup; guess failures are always recoverable
//! and leave the session untouched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A string could not be turned into a [`Word`](crate::core::Word)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word is empty")]
    Empty,

    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("word must contain only letters a-z")]
    NonAlphabetic,
}

/// A word list could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list '{name}' contains no words")]
    Empty { name: String },

    #[error("word list '{name}' line {line}: '{entry}' is not a valid word ({reason})")]
    Malformed {
        name: String,
        line: usize,
        entry: String,
        reason: WordError,
    },
}

/// The answer pool has no words to draw a target from
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no answer words available")]
pub struct EmptyPoolError;

/// Why a guess was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    #[error(transparent)]
    Malformed(#[from] WordError),

    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
}

impl InvalidGuess {
    /// Stable reason code: `empty`, `length`, `non-alpha` or `not-in-dictionary`
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Malformed(WordError::Empty) => "empty",
            Self::Malformed(WordError::InvalidLength { .. }) => "length",
            Self::Malformed(WordError::NonAlphabetic) => "non-alpha",
            Self::NotInDictionary(_) => "not-in-dictionary",
        }
    }
}

/// A guess could not be submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("the game is already over")]
    SessionOver,

    #[error("invalid guess: {0}")]
    Invalid(#[from] InvalidGuess),
}

impl GuessError {
    /// Shorthand for the reason code of an invalid guess
    #[must_use]
    pub const fn reason(&self) -> Option<&'static str> {
        match self {
            Self::SessionOver => None,
            Self::Invalid(invalid) => Some(invalid.reason()),
        }
    }
}

/// Statistics could not be read or written
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("statistics file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("statistics file {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
