//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout, without the TUI.

use crate::config::{GameConfig, TargetPicker};
use crate::error::{GuessError, InvalidGuess};
use crate::game::{GameSession, GameState};
use crate::output::formatters::{colored_row, emoji_grid};
use crate::stats::Statistics;
use crate::wordlists::WordRepository;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run the simple interactive CLI mode on the terminal
///
/// # Errors
///
/// Returns an error on I/O failure or if no target word can be drawn.
pub fn run_simple(words: &WordRepository, config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(
        words,
        config,
        &mut config.targets(),
        stdin.lock(),
        stdout.lock(),
    )
}

/// Line-based game loop over arbitrary input and output
///
/// Ends on `quit`, end of input, or declining a new game. Finished games are
/// added to the statistics file.
///
/// # Errors
///
/// Returns an error on I/O failure or if no target word can be drawn.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R: BufRead, W: Write>(
    words: &WordRepository,
    config: &GameConfig,
    targets: &mut TargetPicker,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut stats = load_stats(config);

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Wordle - Text Mode                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the 5-letter word in {} tries.",
        config.max_attempts
    )?;
    writeln!(out, "Commands: 'quit' to exit, 'new' to give up and start over\n")?;

    let mut session = targets
        .new_session(words, config.max_attempts)
        .context("cannot start a game")?;

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts().len() + 1,
            session.max_attempts()
        );
        let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                writeln!(
                    out,
                    "The word was: {}",
                    session.target().text().to_uppercase().bold()
                )?;
                session = targets.new_session(words, config.max_attempts)?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&line) {
            Ok(outcome) => {
                writeln!(out, "   {}", colored_row(&outcome.feedback))?;
                if !outcome.state.is_terminal() {
                    writeln!(out, "   {} tries left\n", session.remaining_attempts())?;
                    continue;
                }
            }
            Err(GuessError::Invalid(InvalidGuess::NotInDictionary(_))) => {
                writeln!(out, "❌ Not in word list\n")?;
                continue;
            }
            Err(GuessError::Invalid(err)) => {
                writeln!(out, "❌ {err}\n")?;
                continue;
            }
            Err(err @ GuessError::SessionOver) => {
                writeln!(out, "❌ {err}\n")?;
                continue;
            }
        }

        finish_game(&session, &mut stats, config, &mut out)?;

        let again = read_line(&mut input, &mut out, "Play again? (yes/no)")?;
        if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            session = targets.new_session(words, config.max_attempts)?;
            writeln!(out, "\n🔄 New game started!\n")?;
        } else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

fn finish_game<W: Write>(
    session: &GameSession<'_>,
    stats: &mut Statistics,
    config: &GameConfig,
    out: &mut W,
) -> Result<()> {
    stats.record(session);
    if let Err(e) = stats.save(&config.stats_path) {
        warn!(error = %e, "could not save statistics");
    }

    let target = session.target().text().to_uppercase();
    writeln!(out)?;
    if session.state() == GameState::Won {
        let guesses = session.attempts().len();
        writeln!(
            out,
            "{} You won in {guesses} {}!",
            "🎉".bright_green(),
            if guesses == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(out, "Game over. The word was: {}", target.bold())?;
    }

    writeln!(out, "\n{}\n", emoji_grid(session.attempts()))?;
    writeln!(
        out,
        "Played: {}  Win %: {}  Streak: {}  Max streak: {}\n",
        stats.games_played,
        stats.win_percentage(),
        stats.current_streak,
        stats.max_streak
    )?;
    Ok(())
}

/// Statistics from disk, or fresh ones if the file is unusable
pub(crate) fn load_stats(config: &GameConfig) -> Statistics {
    Statistics::load(&config.stats_path).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable statistics");
        Statistics::default()
    })
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
