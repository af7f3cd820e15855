//! Word lists for the game
//!
//! Provides an embedded default dictionary and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

/// Length of every word in the embedded list
pub const EMBEDDED_WORD_LENGTH: usize = 5;
