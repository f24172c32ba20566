//! Round state machine
//!
//! `Idle` → `InTurn` → `GameOver`. A turn ends when a word is accepted or the timer
//! runs out; wrong or repeated words only produce a rejection. Transitions that
//! start a new turn take a `next_challenge` closure so the caller decides where
//! challenges come from; it is only invoked when a new turn actually begins.

use super::config::GameConfig;
use super::difficulty::DifficultyProfile;
use super::error::GameError;
use super::selector::Challenge;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No game started yet
    #[default]
    Idle,
    /// A challenge is active and the timer is running
    InTurn,
    /// Lives ran out; only a restart leaves this phase
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::InTurn => "in turn",
            Self::GameOver => "game over",
        })
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing but whitespace was submitted
    Empty,
    /// Not an answer to the current fragment (or no fragment is active)
    NotAccepted,
    /// Already played earlier in this game
    AlreadyUsed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "nothing entered",
            Self::NotAccepted => "not a valid word for this fragment",
            Self::AlreadyUsed => "already used this game",
        })
    }
}

/// Alphabet bonus earned by an accepted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    /// False when lives were already at the maximum
    pub life_gained: bool,
    pub lives_remaining: u32,
}

/// Result of `submit_word`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { word: Word, bonus: Option<Bonus> },
    Rejected(RejectReason),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Result of `lose_life`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    NextTurn { lives_remaining: u32 },
    GameOver,
}

/// Result of `tick`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Running { remaining_seconds: f64 },
    LifeLost(LifeLoss),
}

/// State of one game: lives, used words and letters, the challenge and its timer
#[derive(Debug, Clone)]
pub struct RoundState {
    config: GameConfig,
    phase: Phase,
    lives: u32,
    used_words: FxHashSet<Word>,
    used_letters: BTreeSet<char>,
    challenge: Option<Challenge>,
    remaining_seconds: f64,
    turn_seconds: f64,
    turn: u64,
    words_accepted: usize,
    bonuses_awarded: usize,
}

impl RoundState {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            lives: config.starting_lives(),
            config,
            phase: Phase::Idle,
            used_words: FxHashSet::default(),
            used_letters: BTreeSet::new(),
            challenge: None,
            remaining_seconds: 0.0,
            turn_seconds: 0.0,
            turn: 0,
            words_accepted: 0,
            bonuses_awarded: 0,
        }
    }

    /// Start a fresh game from any phase
    ///
    /// Lives, used words and used letters are reset; the timer is set to the
    /// profile's turn duration.
    pub fn start_game(&mut self, profile: &DifficultyProfile, challenge: Option<Challenge>) {
        self.lives = self.config.starting_lives();
        self.used_words.clear();
        self.used_letters.clear();
        self.words_accepted = 0;
        self.bonuses_awarded = 0;
        self.turn_seconds = profile.turn_seconds();
        self.phase = Phase::InTurn;

        info!(difficulty = profile.name(), lives = self.lives, "game started");
        self.begin_turn(challenge);
    }

    /// Advance the turn timer
    ///
    /// The timer is floored at zero; reaching zero costs exactly one life.
    ///
    /// # Errors
    /// `GameError::NotInTurn` outside a turn, `GameError::InvalidTick` for negative
    /// or non-finite deltas.
    pub fn tick<F>(&mut self, delta_seconds: f64, next_challenge: F) -> Result<TickOutcome, GameError>
    where
        F: FnOnce() -> Option<Challenge>,
    {
        self.ensure_in_turn()?;
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return Err(GameError::InvalidTick(delta_seconds));
        }

        self.remaining_seconds = (self.remaining_seconds - delta_seconds).max(0.0);

        if self.remaining_seconds <= 0.0 {
            return self.lose_life(next_challenge).map(TickOutcome::LifeLost);
        }

        Ok(TickOutcome::Running {
            remaining_seconds: self.remaining_seconds,
        })
    }

    /// Judge a raw submission against the current challenge
    ///
    /// # Errors
    /// `GameError::NotInTurn` outside a turn. Wrong words are not errors.
    pub fn submit_word<F>(&mut self, raw: &str, next_challenge: F) -> Result<Submission, GameError>
    where
        F: FnOnce() -> Option<Challenge>,
    {
        self.ensure_in_turn()?;

        let Ok(word) = Word::new(raw) else {
            let reason = if raw.trim().is_empty() {
                RejectReason::Empty
            } else {
                RejectReason::NotAccepted
            };
            return Ok(Submission::Rejected(reason));
        };

        if !self
            .challenge
            .as_ref()
            .is_some_and(|challenge| challenge.accepts(word.text()))
        {
            return Ok(Submission::Rejected(RejectReason::NotAccepted));
        }
        if self.used_words.contains(&word) {
            return Ok(Submission::Rejected(RejectReason::AlreadyUsed));
        }

        self.used_words.insert(word.clone());
        self.used_letters.extend(word.distinct_letters());
        self.words_accepted += 1;
        debug!(word = word.text(), "word accepted");

        let bonus = self.apply_alphabet_bonus();
        self.begin_turn(next_challenge());

        Ok(Submission::Accepted { word, bonus })
    }

    /// Take one life; the last life ends the game
    ///
    /// # Errors
    /// `GameError::NotInTurn` outside a turn.
    pub fn lose_life<F>(&mut self, next_challenge: F) -> Result<LifeLoss, GameError>
    where
        F: FnOnce() -> Option<Challenge>,
    {
        self.ensure_in_turn()?;

        self.lives = self.lives.saturating_sub(1);

        if self.lives == 0 {
            self.phase = Phase::GameOver;
            self.challenge = None;
            self.remaining_seconds = 0.0;
            info!(
                words = self.words_accepted,
                bonuses = self.bonuses_awarded,
                "game over"
            );
            return Ok(LifeLoss::GameOver);
        }

        info!(lives = self.lives, "life lost");
        self.begin_turn(next_challenge());
        Ok(LifeLoss::NextTurn {
            lives_remaining: self.lives,
        })
    }

    fn apply_alphabet_bonus(&mut self) -> Option<Bonus> {
        if !self.config.tracked_letters().all_used(&self.used_letters) {
            return None;
        }

        let life_gained = self.lives < self.config.max_lives();
        if life_gained {
            self.lives += 1;
        }
        self.used_letters.clear();
        self.bonuses_awarded += 1;

        info!(life_gained, lives = self.lives, "alphabet bonus");
        Some(Bonus {
            life_gained,
            lives_remaining: self.lives,
        })
    }

    fn begin_turn(&mut self, challenge: Option<Challenge>) {
        self.turn += 1;
        self.remaining_seconds = self.turn_seconds;

        match &challenge {
            Some(c) => debug!(turn = self.turn, fragment = %c.fragment(), "turn started"),
            None => debug!(turn = self.turn, "turn started without a feasible fragment"),
        }
        self.challenge = challenge;
    }

    fn ensure_in_turn(&self) -> Result<(), GameError> {
        if self.phase == Phase::InTurn {
            Ok(())
        } else {
            Err(GameError::NotInTurn { phase: self.phase })
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn lives_remaining(&self) -> u32 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current challenge; `None` before the first game, after game over, or when
    /// no fragment met the difficulty threshold
    #[inline]
    #[must_use]
    pub const fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<Word> {
        &self.used_words
    }

    /// Check a normalized word against this game's history
    #[must_use]
    pub fn has_used(&self, word: &str) -> bool {
        self.used_words.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn remaining_seconds(&self) -> f64 {
        self.remaining_seconds
    }

    #[inline]
    #[must_use]
    pub const fn turn_seconds(&self) -> f64 {
        self.turn_seconds
    }

    /// Remaining time as a fraction of the turn, in [0, 1]
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.turn_seconds <= 0.0 {
            return 0.0;
        }
        (self.remaining_seconds / self.turn_seconds).clamp(0.0, 1.0)
    }

    /// Number of turns started in this session, across games
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    #[inline]
    #[must_use]
    pub const fn words_accepted(&self) -> usize {
        self.words_accepted
    }

    #[inline]
    #[must_use]
    pub const fn bonuses_awarded(&self) -> usize {
        self.bonuses_awarded
    }
}
