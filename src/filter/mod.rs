//! Constraint filtering
//!
//! `ConstraintState` holds what a game has learned and decides whether a word
//! is still possible; `CandidateSet` keeps the possible words as a balanced tree.

mod candidates;
mod constraints;

pub use candidates::{CandidateSet, FilterSource};
pub use constraints::ConstraintState;
