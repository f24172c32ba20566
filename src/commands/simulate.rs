//! Automated play
//!
//! Runs many bot games in parallel against one shared index and summarizes how
//! long they last. The bot answers a turn with probability `skill`, picking a random
//! unused accepted word; otherwise it lets the timer run out.

use crate::game::{DifficultyProfile, GameConfig, GameError, GameSession, Phase};
use crate::index::FragmentIndex;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Mixed into the game seed so the bot and the selector draw independent streams
const BOT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Probability of answering a turn, in [0, 1]
    pub skill: f64,
    /// Turns after which a game is abandoned
    pub max_turns: usize,
    pub base_seed: u64,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            skill: 0.9,
            max_turns: 10_000,
            base_seed: 0,
            show_progress: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("skill must be between 0 and 1, got {0}")]
    InvalidSkill(f64),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Outcome of one bot game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub turns: usize,
    pub words_accepted: usize,
    pub bonuses: usize,
    /// False when the game hit the turn limit before running out of lives
    pub finished: bool,
}

/// Summary over all simulated games
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub profile: DifficultyProfile,
    pub records: Vec<GameRecord>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn games(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn average_turns(&self) -> f64 {
        self.average(|record| record.turns)
    }

    #[must_use]
    pub fn average_words(&self) -> f64 {
        self.average(|record| record.words_accepted)
    }

    #[must_use]
    pub fn total_bonuses(&self) -> usize {
        self.records.iter().map(|record| record.bonuses).sum()
    }

    #[must_use]
    pub fn longest_game(&self) -> Option<&GameRecord> {
        self.records.iter().max_by_key(|record| record.turns)
    }

    #[must_use]
    pub fn unfinished(&self) -> usize {
        self.records.iter().filter(|record| !record.finished).count()
    }

    fn average(&self, field: impl Fn(&GameRecord) -> usize) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().map(field).sum::<usize>() as f64 / self.records.len() as f64
    }
}

/// Play one bot game to completion or the turn limit
///
/// # Errors
/// Propagates state violations from the session; none occur for a valid profile.
pub fn simulate_game(
    index: Arc<FragmentIndex>,
    config: GameConfig,
    profile: DifficultyProfile,
    seed: u64,
    skill: f64,
    max_turns: usize,
) -> Result<GameRecord, SimulationError> {
    if !(0.0..=1.0).contains(&skill) {
        return Err(SimulationError::InvalidSkill(skill));
    }

    let mut session = GameSession::seeded(index, config, seed);
    let mut bot = StdRng::seed_from_u64(seed ^ BOT_SEED_SALT);
    session.start_game(profile);

    let mut turns = 0;
    while session.phase() == Phase::InTurn && turns < max_turns {
        turns += 1;

        let round = session.round();
        let answer = round
            .challenge()
            .and_then(|challenge| {
                challenge
                    .accepted_words()
                    .iter()
                    .filter(|word| !round.has_used(word.text()))
                    .choose(&mut bot)
            })
            .map(|word| word.text().to_string());

        match answer {
            Some(word) if bot.random_bool(skill) => {
                session.submit_word(&word)?;
            }
            _ => {
                let remaining = session.round().remaining_seconds();
                session.tick(remaining)?;
            }
        }
    }

    let round = session.round();
    Ok(GameRecord {
        seed,
        turns,
        words_accepted: round.words_accepted(),
        bonuses: round.bonuses_awarded(),
        finished: round.phase() == Phase::GameOver,
    })
}

/// Run a batch of bot games in parallel
///
/// # Errors
/// Returns an error for an out-of-range skill, or the first failing game.
pub fn run_simulation(
    index: &Arc<FragmentIndex>,
    config: &GameConfig,
    profile: &DifficultyProfile,
    settings: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    if !(0.0..=1.0).contains(&settings.skill) {
        return Err(SimulationError::InvalidSkill(settings.skill));
    }

    let pb = if settings.show_progress {
        ProgressBar::new(settings.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(profile.name().to_string());

    let start = Instant::now();
    let records = (0..settings.games as u64)
        .into_par_iter()
        .map(|offset| {
            let record = simulate_game(
                Arc::clone(index),
                config.clone(),
                profile.clone(),
                settings.base_seed.wrapping_add(offset),
                settings.skill,
                settings.max_turns,
            );
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(SimulationResult {
        profile: profile.clone(),
        records,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use crate::lexicon::Lexicon;

    fn starter_index() -> Arc<FragmentIndex> {
        Arc::new(FragmentIndex::build(&Lexicon::starter()))
    }

    fn quiet(games: usize, skill: f64) -> SimulationConfig {
        SimulationConfig {
            games,
            skill,
            max_turns: 500,
            base_seed: 42,
            show_progress: false,
        }
    }

    #[test]
    fn unskilled_bot_loses_one_life_per_turn() {
        let record = simulate_game(
            starter_index(),
            GameConfig::default(),
            Difficulty::Hard.profile(),
            7,
            0.0,
            100,
        )
        .unwrap();

        assert!(record.finished);
        assert_eq!(record.turns, 3);
        assert_eq!(record.words_accepted, 0);
    }

    #[test]
    fn perfect_bot_answers_until_words_run_out_or_limit() {
        let record = simulate_game(
            starter_index(),
            GameConfig::default(),
            Difficulty::Hard.profile(),
            7,
            1.0,
            50,
        )
        .unwrap();

        assert!(record.words_accepted > 0);
        assert!(record.turns <= 50);
    }

    #[test]
    fn infeasible_profile_still_ends() {
        let record = simulate_game(
            starter_index(),
            GameConfig::default(),
            DifficultyProfile::new("Impossible", 1_000_000, 5.0).unwrap(),
            1,
            1.0,
            100,
        )
        .unwrap();

        assert!(record.finished);
        assert_eq!(record.turns, 3);
    }

    #[test]
    fn same_seed_same_record() {
        let index = starter_index();
        let play = || {
            simulate_game(
                Arc::clone(&index),
                GameConfig::default(),
                Difficulty::Hard.profile(),
                99,
                0.7,
                200,
            )
            .unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn batch_summary() {
        let index = starter_index();
        let result = run_simulation(
            &index,
            &GameConfig::default(),
            &Difficulty::Hard.profile(),
            &quiet(8, 0.5),
        )
        .unwrap();

        assert_eq!(result.games(), 8);
        assert!(result.average_turns() >= 3.0);
        assert!(result.longest_game().is_some());
        let seeds: Vec<u64> = result.records.iter().map(|record| record.seed).collect();
        assert_eq!(seeds, (42..50).collect::<Vec<_>>());
    }

    #[test]
    fn skill_out_of_range_is_rejected() {
        let result = run_simulation(
            &starter_index(),
            &GameConfig::default(),
            &Difficulty::Hard.profile(),
            &quiet(1, 1.5),
        );
        assert!(matches!(result, Err(SimulationError::InvalidSkill(_))));
    }
}
