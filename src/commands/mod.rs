//! Command implementations

pub mod analyze;
pub mod fragments;
pub mod simple;
pub mod simulate;

pub use analyze::{FragmentAnalysis, analyze_fragment};
pub use fragments::{FragmentReport, TierCoverage, fragment_report};
pub use simple::{play_lines, run_simple};
pub use simulate::{
    GameRecord, SimulationConfig, SimulationError, SimulationResult, run_simulation,
    simulate_game,
};
