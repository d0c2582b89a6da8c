//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard, messages and statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterState, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages and statistics
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn state_style(state: Option<LetterState>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        Some(LetterState::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterState::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterState::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: Option<char>, state: Option<LetterState>) -> Span<'static> {
    let text = letter.map_or_else(|| "[ ]".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
    Span::styled(text, state_style(state))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let rows = u16::try_from(app.session.max_attempts()).unwrap_or(u16::MAX);
    let grid_height = rows.saturating_mul(2).saturating_add(1);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(grid_height), // Tile grid
            Constraint::Length(8),        // Keyboard
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn grid_lines(app: &App) -> Vec<Line<'static>> {
    let attempts = app.session.attempts();
    let mut lines = Vec::with_capacity(app.session.max_attempts() * 2);

    for row in 0..app.session.max_attempts() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(attempt) = attempts.get(row) {
            for lf in attempt.feedback.letters() {
                spans.push(tile(Some(lf.letter), Some(lf.state)));
                spans.push(Span::raw(" "));
            }
        } else if row == attempts.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                spans.push(tile(typed.get(i).copied(), None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(tile(None, None));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = Paragraph::new(grid_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guess {}/{} ",
                    (app.session.attempts().len() + 1).min(app.session.max_attempts()),
                    app.session.max_attempts()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .map(|c| tile(Some(c), keyboard.state_of(c)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!("Played: {}", stats.games_played)),
        Line::from(format!("Win %:  {}", stats.win_percentage())),
        Line::from(format!(
            "Streak: {} (max {})",
            stats.current_streak, stats.max_streak
        )),
    ];
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = bar_width(count, max);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

const STATS_BAR_WIDTH: u64 = 12;

/// Length of a distribution bar, scaled so the largest count fills it
fn bar_width(count: u32, max: u32) -> usize {
    let scaled = u64::from(count) * STATS_BAR_WIDTH / u64::from(max.max(1));
    usize::try_from(scaled.min(STATS_BAR_WIDTH)).unwrap_or(0)
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Backspace to erase ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state_text = format!("Game: {}", app.session.state());
    f.render_widget(
        Paragraph::new(state_text).alignment(Alignment::Center),
        chunks[0],
    );

    let remaining_text = format!("Tries left: {}", app.session.remaining_attempts());
    f.render_widget(
        Paragraph::new(remaining_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, TargetPicker};
    use crate::stats::Statistics;
    use crate::wordlists::WordRepository;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app<'a>(words: &'a WordRepository) -> App<'a> {
        App::with_targets(
            words,
            GameConfig::default(),
            TargetPicker::seeded(0),
            Statistics::default(),
        )
        .unwrap()
    }

    #[test]
    fn renders_header_and_panels() {
        let words = WordRepository::from_words(&["crate"], &["slate"]).unwrap();
        let app = app(&words);

        let text = screen(&app);
        assert!(text.contains("WORDLE"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Statistics"));
        assert!(text.contains("Tries left: 6"));
    }

    #[test]
    fn bar_width_scales_without_overflow() {
        assert_eq!(bar_width(0, 1), 0);
        assert_eq!(bar_width(3, 6), 6);
        assert_eq!(bar_width(u32::MAX, u32::MAX), 12);
        assert_eq!(bar_width(u32::MAX / 2, u32::MAX), 5);
    }

    #[test]
    fn renders_saturated_statistics() {
        let words = WordRepository::from_words(&["crate"], &["slate"]).unwrap();
        let mut app = app(&words);
        app.stats.games_played = u32::MAX;
        app.stats.games_won = u32::MAX;
        app.stats.guess_distribution = [u32::MAX, 1, 0, 0, 0, 0];

        assert!(screen(&app).contains("Win %:  100"));
    }

    #[test]
    fn grid_has_a_row_per_attempt() {
        let words = WordRepository::from_words(&["crate"], &["slate"]).unwrap();
        let mut app = app(&words);
        app.input_buffer = "sl".to_string();

        let lines = grid_lines(&app);
        assert_eq!(lines.len(), 12);

        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.starts_with(" S   L  [ ]"));
    }

    #[test]
    fn grid_shows_submitted_guess() {
        let words = WordRepository::from_words(&["crate"], &["slate"]).unwrap();
        let mut app = app(&words);
        app.session.submit_guess("slate").unwrap();

        let lines = grid_lines(&app);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(first, " S   L   A   T   E  ");
        assert_eq!(lines[0].spans[4].style, state_style(Some(LetterState::Correct)));
    }
}
