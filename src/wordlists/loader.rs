//! Word list loading utilities
//!
//! Builds a `DictionaryStore` from the embedded list or a file. Word lists
//! are usually sorted, and inserting sorted words into the unbalanced
//! dictionary tree makes it a list, so words are inserted in shuffled order.

use crate::core::Word;
use crate::dictionary::DictionaryStore;
use crate::error::WordError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// The first non-empty line sets the word length; lines of any other length
/// or with invalid characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidData` if it
/// holds no words.
///
/// # Examples
/// ```no_run
/// use word_checker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let length = lines
        .first()
        .map(|first| first.len())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "word list is empty"))?;

    let words = words_from_slice(&lines, length);
    if words.len() < lines.len() {
        log::warn!(
            "skipped {} lines that are not {length}-letter words",
            lines.len() - words.len()
        );
    }

    Ok(words)
}

/// Convert a string slice to words of `length` letters, skipping invalid ones
///
/// # Examples
/// ```
/// use word_checker::wordlists::loader::words_from_slice;
/// use word_checker::wordlists::{WORDS, EMBEDDED_WORD_LENGTH};
///
/// let words = words_from_slice(WORDS, EMBEDDED_WORD_LENGTH);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, length).ok())
        .collect()
}

/// Build a dictionary, inserting `words` in random order
///
/// # Errors
/// Returns `WordError::InvalidLength` if a word does not have `length` letters.
pub fn build_dictionary<R: Rng + ?Sized>(
    mut words: Vec<Word>,
    length: usize,
    rng: &mut R,
) -> Result<DictionaryStore, WordError> {
    words.shuffle(rng);

    let mut dictionary = DictionaryStore::new(length);
    for word in words {
        dictionary.insert(word)?;
    }

    log::debug!(
        "dictionary built: {} words, height {}",
        dictionary.len(),
        dictionary.height()
    );
    Ok(dictionary)
}
