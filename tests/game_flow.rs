//! Full games through the public API

use std::io::Cursor;
use std::num::NonZeroUsize;
use wordle_game::commands::run_simple_with;
use wordle_game::config::{GameConfig, TargetPicker};
use wordle_game::core::LetterState::{Absent, Correct, Present};
use wordle_game::core::Word;
use wordle_game::error::{GuessError, InvalidGuess};
use wordle_game::game::{GameSession, GameState};
use wordle_game::stats::Statistics;
use wordle_game::wordlists::WordRepository;

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn embedded_repository_plays_a_game() {
    let words = WordRepository::embedded();
    let mut session = GameSession::new(&words, word("crate"));

    let outcome = session.submit_guess("crate").unwrap();

    assert_eq!(outcome.feedback.states(), [Correct; 5]);
    assert_eq!(outcome.state, GameState::Won);
    assert!(session.is_won());
    assert!(session.is_over());
}

#[test]
fn duplicate_letters_follow_two_pass_rule() {
    let words = WordRepository::from_words(&["speed"], &["erase"]).unwrap();
    let mut session = GameSession::new(&words, word("speed"));

    let outcome = session.submit_guess("erase").unwrap();
    let pairs: Vec<(char, _)> = outcome
        .feedback
        .letters()
        .iter()
        .map(|lf| (lf.letter, lf.state))
        .collect();

    assert_eq!(
        pairs,
        [
            ('e', Present),
            ('r', Absent),
            ('a', Absent),
            ('s', Present),
            ('e', Present)
        ]
    );
}

#[test]
fn rejected_guesses_leave_session_untouched() {
    let words = WordRepository::from_words(&["crate"], &["board"]).unwrap();
    let mut session = GameSession::new(&words, word("crate"));

    let cases = [
        ("", "empty"),
        ("ab", "length"),
        ("cr4te", "non-alpha"),
        ("qwert", "not-in-dictionary"),
    ];
    for (raw, reason) in cases {
        let err = session.submit_guess(raw).unwrap_err();
        assert_eq!(err.reason(), Some(reason), "guess {raw:?}");
    }

    assert!(session.attempts().is_empty());
    assert_eq!(session.remaining_attempts(), 6);
    assert_eq!(session.state(), GameState::InProgress);
}

#[test]
fn six_misses_then_session_over() {
    let words = WordRepository::from_words(&["board"], &["zzzzz"]).unwrap();
    let mut session = GameSession::new(&words, word("board"));

    for _ in 0..6 {
        let outcome = session.submit_guess("zzzzz").unwrap();
        assert_eq!(outcome.feedback.states(), [Absent; 5]);
    }

    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.remaining_attempts(), 0);
    assert!(matches!(
        session.submit_guess("board"),
        Err(GuessError::SessionOver)
    ));
    assert_eq!(session.attempts().len(), 6);
}

#[test]
fn custom_attempt_limit() {
    let words = WordRepository::from_words(&["board"], &["zzzzz"]).unwrap();
    let limit = NonZeroUsize::new(2).unwrap();
    let mut session = GameSession::with_max_attempts(&words, word("board"), limit);

    session.submit_guess("zzzzz").unwrap();
    let outcome = session.submit_guess("zzzzz").unwrap();

    assert_eq!(outcome.state, GameState::Lost);
}

#[test]
fn unknown_word_error_names_the_word() {
    let words = WordRepository::from_words(&["board"], &["zzzzz"]).unwrap();
    let mut session = GameSession::new(&words, word("board"));

    let err = session.submit_guess("Qwert").unwrap_err();
    assert!(matches!(
        err,
        GuessError::Invalid(InvalidGuess::NotInDictionary(ref w)) if w == "qwert"
    ));
}

#[test]
fn statistics_accumulate_across_games() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("stats.json");
    let words = WordRepository::from_words(&["crate"], &["zzzzz"]).unwrap();

    let mut stats = Statistics::load(&path).unwrap();
    let mut picker = TargetPicker::seeded(7);

    let mut won = picker.new_session(&words, NonZeroUsize::new(6).unwrap()).unwrap();
    won.submit_guess("zzzzz").unwrap();
    won.submit_guess("crate").unwrap();
    stats.record(&won);

    let mut lost = picker.new_session(&words, NonZeroUsize::new(1).unwrap()).unwrap();
    lost.submit_guess("zzzzz").unwrap();
    stats.record(&lost);

    stats.save(&path).unwrap();
    let reloaded = Statistics::load(&path).unwrap();

    assert_eq!(reloaded, stats);
    assert_eq!(reloaded.games_played, 2);
    assert_eq!(reloaded.games_won, 1);
    assert_eq!(reloaded.current_streak, 0);
    assert_eq!(reloaded.max_streak, 1);
    assert_eq!(reloaded.guess_distribution, [0, 1, 0, 0, 0, 0]);
    assert_eq!(reloaded.win_percentage(), 50);
}

#[test]
fn text_mode_session_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let words = WordRepository::from_words(&["crate"], &["slate"]).unwrap();
    let config = GameConfig {
        stats_path: dir.path().join("statistics.json"),
        ..GameConfig::default()
    };

    let mut out = Vec::new();
    run_simple_with(
        &words,
        &config,
        &mut TargetPicker::seeded(1),
        Cursor::new("slate\nxyz\ncrate\nn\n"),
        &mut out,
    )
    .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("word must be exactly 5 letters, got 3"));
    assert!(output.contains("You won in 2 guesses!"));

    let stats = Statistics::load(&config.stats_path).unwrap();
    assert_eq!(stats.games_won, 1);
}
