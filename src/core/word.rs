//! Fixed-length word representation
//!
//! A `Word` is an immutable ASCII string whose length matches the word length
//! configured for the process. Ordering is plain byte-wise lexicographic order.

use crate::error::WordError;
use std::fmt;

/// An immutable word of the configured length
///
/// Letters are raw ASCII bytes: the alphabet is case-sensitive and includes
/// digits, `-` and `_` alongside letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: Box<str>,
}

impl Word {
    /// Create a new word, checking it has exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Length is not exactly `length`
    /// - A character is not an ASCII letter, digit, `-` or `_`
    ///
    /// # Examples
    /// ```
    /// use word_checker::core::Word;
    ///
    /// let word = Word::new("cane", 4).unwrap();
    /// assert_eq!(word.text(), "cane");
    ///
    /// assert!(Word::new("canes", 4).is_err());
    /// assert!(Word::new("ca e", 4).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(ch) = text.chars().find(|&c| !is_word_char(c)) {
            return Err(WordError::InvalidCharacter(ch));
        }

        // ASCII only from here, so byte length == letter count
        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                found: text.len(),
            });
        }

        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Count how many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&l| l == letter).count()
    }
}

/// Letters, digits, `-` and `_`
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
