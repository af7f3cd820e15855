//! Command-stream line classification
//!
//! Every input line is either a `+` command or a word.

use crate::core::Word;
use crate::error::WordError;

pub const NEW_GAME: &str = "+nuova_partita";
pub const INSERT_START: &str = "+inserisci_inizio";
pub const INSERT_END: &str = "+inserisci_fine";
pub const PRINT_FILTERED: &str = "+stampa_filtrate";

pub const OUTPUT_SOLVED: &str = "ok";
pub const OUTPUT_EXHAUSTED: &str = "ko";
pub const OUTPUT_NOT_IN_DICTIONARY: &str = "not_exists";

/// A classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    NewGame,
    InsertStart,
    InsertEnd,
    PrintFiltered,
    /// A `+` line that is not a known command
    UnknownCommand(&'a str),
    /// Anything else: a word, target, budget or guess
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a raw line; trailing whitespace is ignored
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim_end();
        if !line.starts_with('+') {
            return Self::Text(line);
        }

        match line {
            NEW_GAME => Self::NewGame,
            INSERT_START => Self::InsertStart,
            INSERT_END => Self::InsertEnd,
            PRINT_FILTERED => Self::PrintFiltered,
            other => Self::UnknownCommand(other),
        }
    }

    #[must_use]
    pub const fn is_command(self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

/// Turn a text line into a word of `length` letters
///
/// Lines longer than `length` are cut to their first `length` characters.
///
/// # Errors
/// Returns `WordError` if the line is too short or has invalid characters.
pub fn normalize_word(text: &str, length: usize) -> Result<Word, WordError> {
    let text = text.trim_end();
    match text.char_indices().nth(length) {
        Some((cut, _)) => Word::new(&text[..cut], length),
        None => Word::new(text, length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert_eq!(Line::parse("+nuova_partita\n"), Line::NewGame);
        assert_eq!(Line::parse("+inserisci_inizio"), Line::InsertStart);
        assert_eq!(Line::parse("+inserisci_fine\r\n"), Line::InsertEnd);
        assert_eq!(Line::parse("+stampa_filtrate"), Line::PrintFiltered);
        assert_eq!(Line::parse("+boh"), Line::UnknownCommand("+boh"));
    }

    #[test]
    fn other_lines_are_text() {
        assert_eq!(Line::parse("cane\n"), Line::Text("cane"));
        assert_eq!(Line::parse("12"), Line::Text("12"));
        assert!(!Line::parse("cane").is_command());
        assert!(Line::parse("+boh").is_command());
    }

    #[test]
    fn normalize_truncates_long_lines() {
        assert_eq!(normalize_word("canestro", 4).unwrap().text(), "cane");
        assert_eq!(normalize_word("cane\n", 4).unwrap().text(), "cane");
    }

    #[test]
    fn normalize_rejects_short_lines() {
        assert_eq!(
            normalize_word("can", 4),
            Err(WordError::InvalidLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(normalize_word("", 4), Err(WordError::Empty));
    }
}
