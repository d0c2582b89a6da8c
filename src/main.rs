//! Wordle - CLI
//!
//! Wordle game with TUI and text modes, plus one-off guess checking and
//! statistics display.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;
use wordle_game::{
    commands::{check_guess, run_simple, show_stats},
    config::{DEFAULT_STATS_PATH, GameConfig},
    logging::init_logger,
    output::print_feedback,
    wordlists::WordRepository,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (requires --allowed)
    #[arg(long, global = true, requires = "allowed")]
    answers: Option<PathBuf>,

    /// Extra accepted guesses, one word per line (requires --answers)
    #[arg(long, global = true, requires = "answers")]
    allowed: Option<PathBuf>,

    /// Statistics file
    #[arg(long, global = true, default_value = DEFAULT_STATS_PATH)]
    stats: PathBuf,

    /// Number of guesses per game
    #[arg(short = 'm', long, global = true, default_value = "6")]
    max_attempts: NonZeroUsize,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Start with today's puzzle instead of a random word
    #[arg(long, global = true)]
    daily: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode on stdin/stdout
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Show saved statistics
    Stats,
}

/// Word lists from the given files, or the embedded lists
fn load_words(answers: Option<&PathBuf>, allowed: Option<&PathBuf>) -> Result<WordRepository> {
    match (answers, allowed) {
        (Some(answers), Some(allowed)) => WordRepository::load(answers, allowed)
            .context("failed to load word lists"),
        _ => {
            debug!("using embedded word lists");
            Ok(WordRepository::embedded())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose, cli.log_file.as_deref())?;

    let config = GameConfig {
        max_attempts: cli.max_attempts,
        seed: cli.seed,
        daily: cli.daily,
        stats_path: cli.stats,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Stats => show_stats(&config.stats_path).map(|_| ()),
        Commands::Check { guess, target } => {
            let words = load_words(cli.answers.as_ref(), cli.allowed.as_ref())?;
            let feedback = check_guess(&words, &guess, &target)?;
            print_feedback(&feedback);
            Ok(())
        }
        Commands::Simple => {
            let words = load_words(cli.answers.as_ref(), cli.allowed.as_ref())?;
            run_simple(&words, &config)
        }
        Commands::Play => {
            let words = load_words(cli.answers.as_ref(), cli.allowed.as_ref())?;
            run_play_command(&words, config)
        }
    }
}

fn run_play_command(words: &WordRepository, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config).context("cannot start a game")?;
    run_tui(app)
}
