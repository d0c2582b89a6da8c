//! TUI application state and logic

use crate::commands::simple::load_stats;
use crate::config::{GameConfig, TargetPicker};
use crate::core::WORD_LENGTH;
use crate::error::{EmptyPoolError, GuessError, InvalidGuess};
use crate::game::{GameSession, GameState};
use crate::stats::Statistics;
use crate::wordlists::WordRepository;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<'a> {
    pub words: &'a WordRepository,
    pub session: GameSession<'a>,
    pub config: GameConfig,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    targets: TargetPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// App for the configured run, with statistics read from disk
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the repository has no answers.
    pub fn new(words: &'a WordRepository, config: GameConfig) -> Result<Self, EmptyPoolError> {
        let targets = config.targets();
        let stats = load_stats(&config);
        Self::with_targets(words, config, targets, stats)
    }

    /// App with an explicit target picker and starting statistics
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the repository has no answers.
    pub fn with_targets(
        words: &'a WordRepository,
        config: GameConfig,
        mut targets: TargetPicker,
        stats: Statistics,
    ) -> Result<Self, EmptyPoolError> {
        let session = targets.new_session(words, config.max_attempts)?;

        Ok(Self {
            words,
            session,
            config,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden 5-letter word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Esc to quit".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
            targets,
        })
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, self.input_mode) {
            (KeyCode::Char('c'), _) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), InputMode::GameOver) => {
                self.should_quit = true;
            }
            (KeyCode::Char('n'), InputMode::GameOver) => self.new_game(),
            (KeyCode::Char(c), InputMode::Guessing) => self.type_letter(c),
            (KeyCode::Backspace, InputMode::Guessing) => {
                self.input_buffer.pop();
            }
            (KeyCode::Enter, InputMode::Guessing) => self.submit_guess(),
            _ => {}
        }
    }

    /// Add a letter to the current row if there is room
    pub fn type_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the current row to the session
    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        match self.session.submit_guess(&guess) {
            Ok(outcome) => {
                if outcome.state.is_terminal() {
                    self.finish_game();
                }
            }
            Err(GuessError::Invalid(InvalidGuess::NotInDictionary(_))) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        if let Err(e) = self.stats.save(&self.config.stats_path) {
            warn!(error = %e, "could not save statistics");
            self.add_message("Could not save statistics", MessageStyle::Error);
        }

        let target = self.session.target().text().to_uppercase();
        match self.session.state() {
            GameState::Won => {
                let celebration = match self.session.attempts().len() {
                    1 => "🎯 Genius! Got it in one!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost => {
                self.add_message(&format!("The word was: {target}"), MessageStyle::Error);
            }
            GameState::InProgress => {}
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        match self.targets.new_session(self.words, self.config.max_attempts) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
