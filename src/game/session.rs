//! Game session: one round state plus everything needed to drive it
//!
//! A session owns its `RoundState`, the random source and the selector for the
//! current difficulty, and shares the read-only index. Ticks and submissions go
//! through `&mut self`, so they are serialized by construction.

use super::config::GameConfig;
use super::difficulty::DifficultyProfile;
use super::error::GameError;
use super::round::{LifeLoss, Phase, RoundState, Submission, TickOutcome};
use super::selector::{Challenge, ChallengeSelector};
use super::view::RoundView;
use crate::index::FragmentIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::debug;

/// A single player's game driver
pub struct GameSession<R: Rng = StdRng> {
    index: Arc<FragmentIndex>,
    rng: R,
    selector: Option<ChallengeSelector>,
    round: RoundState,
}

impl GameSession<StdRng> {
    /// Session seeded from the operating system
    #[must_use]
    pub fn new(index: Arc<FragmentIndex>, config: GameConfig) -> Self {
        Self::with_rng(index, config, StdRng::from_os_rng())
    }

    /// Reproducible session
    #[must_use]
    pub fn seeded(index: Arc<FragmentIndex>, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(index, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(index: Arc<FragmentIndex>, config: GameConfig, rng: R) -> Self {
        Self {
            index,
            rng,
            selector: None,
            round: RoundState::new(config),
        }
    }

    /// Start (or restart) a game at the given difficulty
    ///
    /// Returns the first challenge, or `None` if no fragment meets the profile's
    /// threshold. The game runs either way.
    pub fn start_game(&mut self, profile: DifficultyProfile) -> Option<&Challenge> {
        let selector = ChallengeSelector::new(Arc::clone(&self.index), profile);
        let challenge = selector.select(&mut self.rng);

        self.round.start_game(selector.profile(), challenge);
        self.selector = Some(selector);
        self.round.challenge()
    }

    /// Advance the active turn's timer
    ///
    /// # Errors
    /// See [`RoundState::tick`].
    pub fn tick(&mut self, delta_seconds: f64) -> Result<TickOutcome, GameError> {
        let Self {
            rng,
            selector,
            round,
            ..
        } = self;
        round.tick(delta_seconds, || next_challenge(selector.as_ref(), rng))
    }

    /// Advance the timer only if `turn` is still the active turn
    ///
    /// A driver stamps each tick with the turn it was scheduled for; ticks left
    /// over from a replaced turn are refused instead of draining the new timer.
    ///
    /// # Errors
    /// `GameError::StaleTick` for an old turn, otherwise as [`Self::tick`].
    pub fn tick_turn(&mut self, turn: u64, delta_seconds: f64) -> Result<TickOutcome, GameError> {
        let active = self.round.turn();
        if turn != active {
            debug!(active, stamped = turn, "stale tick ignored");
            return Err(GameError::StaleTick {
                active,
                stamped: turn,
            });
        }
        self.tick(delta_seconds)
    }

    /// Submit a word for the active turn
    ///
    /// # Errors
    /// See [`RoundState::submit_word`].
    pub fn submit_word(&mut self, raw: &str) -> Result<Submission, GameError> {
        let Self {
            rng,
            selector,
            round,
            ..
        } = self;
        round.submit_word(raw, || next_challenge(selector.as_ref(), rng))
    }

    /// Forfeit the active turn
    ///
    /// # Errors
    /// See [`RoundState::lose_life`].
    pub fn lose_life(&mut self) -> Result<LifeLoss, GameError> {
        let Self {
            rng,
            selector,
            round,
            ..
        } = self;
        round.lose_life(|| next_challenge(selector.as_ref(), rng))
    }

    /// Presentation snapshot of the current state
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView::project(&self.round)
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    /// Identifier of the active turn
    #[inline]
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.round.turn()
    }

    /// Profile of the current or last game
    #[must_use]
    pub fn profile(&self) -> Option<&DifficultyProfile> {
        self.selector.as_ref().map(ChallengeSelector::profile)
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &Arc<FragmentIndex> {
        &self.index
    }
}

fn next_challenge<R: Rng>(selector: Option<&ChallengeSelector>, rng: &mut R) -> Option<Challenge> {
    selector.and_then(|selector| selector.select(rng))
}
