//! Word Checker
//!
//! A word-guessing game engine: a dictionary of fixed-length words, a
//! two-pass guess evaluator and a candidate set that shrinks with every
//! guess.
//!
//! # Quick Start
//!
//! ```rust
//! use word_checker::game::{GuessOutcome, Session};
//!
//! let mut session = Session::new(5);
//! let words = ["abcde", "abcdf", "zzzzz"]
//!     .iter()
//!     .map(|w| session.word(w))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! session.insert_words(words).unwrap();
//!
//! session.new_game("abcde", 3).unwrap();
//! match session.guess("abcdf").unwrap() {
//!     GuessOutcome::Scored(report) => {
//!         assert_eq!(report.feedback.to_string(), "++++/");
//!         assert_eq!(report.filtered_count, 1);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Arena tree helpers shared by the dictionary and the candidate set
pub mod tree;

// Word storage
pub mod dictionary;

// Constraints and candidate filtering
pub mod filter;

// Guess evaluation and game state
pub mod game;

// Line protocol driver
pub mod driver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;
