//! Core domain types for the word game
//!
//! Pure value types: words of the configured length and per-position feedback.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::Word;
