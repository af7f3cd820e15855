//! Dictionary of every known word
//!
//! Lives for the whole process and only grows.

mod store;

pub use store::{DictionaryStore, WordId};
