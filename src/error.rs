//! Error types
//!
//! Guessing a word that is not in the dictionary and running out of
//! candidates are ordinary game states, not errors.

use std::io;
use thiserror::Error;

/// A word that cannot be accepted for the configured length
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("word is empty")]
    Empty,
}

/// Errors raised by the game controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error("the game is already over")]
    GameOver,

    #[error("no game in progress")]
    NoActiveGame,
}

/// Errors raised while reading a command stream
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("input ended before the word length was given")]
    MissingWordLength,

    #[error("invalid word length: {0:?}")]
    InvalidWordLength(String),

    #[error("invalid guess budget: {0:?}")]
    InvalidGuessBudget(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
