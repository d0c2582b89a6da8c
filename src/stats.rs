//! Game statistics and their JSON file
//!
//! The file is a small JSON object; fields missing from it fall back to zero
//! so older or hand-edited files keep loading.

use crate::error::StatsError;
use crate::game::{GameSession, GameState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Number of guess-distribution buckets (wins in 1..=6 guesses)
pub const DISTRIBUTION_BUCKETS: usize = 6;

/// Lifetime statistics across games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses; wins beyond the last bucket land in it
    pub guess_distribution: [u32; DISTRIBUTION_BUCKETS],
}

impl Statistics {
    /// Count a finished game
    ///
    /// Sessions still in progress are ignored.
    pub fn record(&mut self, session: &GameSession<'_>) {
        match session.state() {
            GameState::InProgress => {}
            GameState::Won => self.record_win(session.attempts().len()),
            GameState::Lost => self.record_loss(),
        }
    }

    /// Count a win that took `guesses` guesses
    pub fn record_win(&mut self, guesses: usize) {
        self.games_played = self.games_played.saturating_add(1);
        self.games_won = self.games_won.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);

        let bucket = guesses.clamp(1, DISTRIBUTION_BUCKETS) - 1;
        self.guess_distribution[bucket] = self.guess_distribution[bucket].saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.current_streak = 0;
    }

    /// Share of games won, rounded down to a whole percent, at most 100
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }

        let percent = u64::from(self.games_won) * 100 / u64::from(self.games_played);
        u32::try_from(percent.min(100)).unwrap_or(100)
    }

    /// Read statistics from a JSON file
    ///
    /// A missing file yields fresh statistics.
    ///
    /// # Errors
    ///
    /// Returns `StatsError` if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StatsError> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no statistics file yet");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StatsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StatsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write statistics as pretty JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `StatsError` if the directory or file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StatsError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| StatsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| StatsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)?;

        debug!(path = %path.display(), games = self.games_played, "statistics saved");
        Ok(())
    }
}
