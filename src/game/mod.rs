//! Game logic
//!
//! The evaluator scores guesses, `Game` runs a single game and `Session`
//! ties games to the long-lived dictionary.

mod controller;
mod evaluator;
mod session;

pub use controller::{Game, GameStatus, GuessOutcome, GuessReport, Listing};
pub use evaluator::{Evaluation, evaluate};
pub use session::Session;
