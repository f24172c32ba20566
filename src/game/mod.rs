//! Round logic: difficulty, challenge selection and the turn/life state machine
//!
//! `RoundState` is the pure state machine. `GameSession` wraps it together with the
//! shared index, a selector and a random source, and is what front ends drive.

mod clock;
mod config;
mod difficulty;
mod error;
mod round;
mod selector;
mod session;
mod view;

pub use clock::TurnClock;
pub use config::{
    ConfigError, DEFAULT_TICK_INTERVAL, DEFAULT_TRACKED_LETTERS, GameConfig, MAX_LIVES,
    STARTING_LIVES, TrackedLetters,
};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::GameError;
pub use round::{Bonus, LifeLoss, Phase, RejectReason, RoundState, Submission, TickOutcome};
pub use selector::{Challenge, ChallengeSelector};
pub use session::GameSession;
pub use view::{
    GAME_OVER_TEXT, Highlight, IDLE_TEXT, LOW_TIME_FRACTION, LetterTile, NO_FRAGMENT_TEXT,
    RoundView, highlight_fragment,
};
