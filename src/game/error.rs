//! Caller errors raised by the round state machine
//!
//! Rejected words are not errors; they are reported through `Submission`.

use super::round::Phase;
use thiserror::Error;

/// A call that is not valid in the current state; state is left untouched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("no turn is active (phase: {phase})")]
    NotInTurn { phase: Phase },

    #[error("tick for turn {stamped} arrived during turn {active}")]
    StaleTick { active: u64, stamped: u64 },

    #[error("tick delta must be a finite, non-negative number of seconds, got {0}")]
    InvalidTick(f64),
}
