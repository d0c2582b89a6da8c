//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or embedded constants.

use crate::core::Word;
use crate::error::LoadError;
use std::fs;
use std::path::Path;

/// Parse a newline-delimited word list
///
/// Every line is trimmed and lowercased; blank lines are skipped. `name` is
/// only used in error messages.
///
/// # Errors
///
/// Returns `LoadError::Malformed` for the first line that is not a 5-letter
/// alphabetic word, and `LoadError::Empty` if no words remain.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("CRANE\n slate \n\n", "inline").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
pub fn parse_word_list(content: &str, name: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|reason| LoadError::Malformed {
            name: name.to_string(),
            line: index + 1,
            entry: trimmed.to_string(),
            reason,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty {
            name: name.to_string(),
        });
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise the errors of
/// [`parse_word_list`].
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content, &path.display().to_string())
}

/// Convert embedded string slice to Word vector
///
/// Embedded lists are generated from validated data, so invalid entries are
/// skipped rather than reported.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
