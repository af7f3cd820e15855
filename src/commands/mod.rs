//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{PlayConfig, PlaySummary, run_play};
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, run_simulation};
