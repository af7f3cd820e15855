//! Line-oriented command-stream driver
//!
//! The text protocol around `Session`: dictionary loading, games, insertions
//! and candidate printing.

pub mod protocol;
mod runner;

pub use runner::{RunSummary, run};
