//! Game configuration: lives, tracked letters and tick cadence

use std::collections::BTreeSet;
use std::time::Duration;
use thiserror::Error;

/// Lives at the start of every game
pub const STARTING_LIVES: u32 = 3;

/// Upper bound for lives, including bonus lives
pub const MAX_LIVES: u32 = 5;

/// Interval between timer ticks driven by the presentation layer
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Letters that must all be used to earn a bonus life: A through Y
pub const DEFAULT_TRACKED_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXY";

/// Configuration and profile validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}', expected one of: easy, medium, hard, expert")]
    UnknownDifficulty(String),

    #[error("minimum candidate words must be at least 1, got {0}")]
    InvalidMinCandidates(usize),

    #[error("turn duration must be a positive number of seconds, got {0}")]
    InvalidTurnSeconds(f64),

    #[error("starting lives ({starting}) must be between 1 and max lives ({max})")]
    InvalidLives { starting: u32, max: u32 },

    #[error("tracked letter set is empty")]
    EmptyTrackedLetters,
}

/// The letter set whose full coverage awards a bonus life
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedLetters {
    letters: BTreeSet<char>,
}

impl TrackedLetters {
    /// Build a tracked set from letters; input is uppercased and deduplicated
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyTrackedLetters` if no letters remain.
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let letters: BTreeSet<char> = letters
            .into_iter()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();

        if letters.is_empty() {
            return Err(ConfigError::EmptyTrackedLetters);
        }

        Ok(Self { letters })
    }

    /// Parse from a string such as `"ABCDEFGHIJKLMNOPQRSTUVWXY"`
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyTrackedLetters` for a blank string.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Self::new(text.chars())
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// True when every tracked letter appears in `used`
    #[must_use]
    pub fn all_used(&self, used: &BTreeSet<char>) -> bool {
        self.letters.iter().all(|letter| used.contains(letter))
    }
}

impl Default for TrackedLetters {
    fn default() -> Self {
        Self {
            letters: DEFAULT_TRACKED_LETTERS.chars().collect(),
        }
    }
}

/// Per-game rules shared by every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    starting_lives: u32,
    max_lives: u32,
    tracked_letters: TrackedLetters,
    tick_interval: Duration,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidLives` unless `1 <= starting_lives <= max_lives`.
    pub fn new(
        starting_lives: u32,
        max_lives: u32,
        tracked_letters: TrackedLetters,
    ) -> Result<Self, ConfigError> {
        if starting_lives == 0 || starting_lives > max_lives {
            return Err(ConfigError::InvalidLives {
                starting: starting_lives,
                max: max_lives,
            });
        }

        Ok(Self {
            starting_lives,
            max_lives,
            tracked_letters,
            tick_interval: DEFAULT_TICK_INTERVAL,
        })
    }

    #[must_use]
    pub const fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    #[inline]
    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    #[inline]
    #[must_use]
    pub const fn max_lives(&self) -> u32 {
        self.max_lives
    }

    #[inline]
    #[must_use]
    pub const fn tracked_letters(&self) -> &TrackedLetters {
        &self.tracked_letters
    }

    #[inline]
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            max_lives: MAX_LIVES,
            tracked_letters: TrackedLetters::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracked_letters_skip_z() {
        let tracked = TrackedLetters::default();
        assert_eq!(tracked.len(), 25);
        assert!(tracked.contains('A'));
        assert!(tracked.contains('Y'));
        assert!(!tracked.contains('Z'));
    }

    #[test]
    fn tracked_letters_normalize_input() {
        let tracked = TrackedLetters::parse("ab a B c").unwrap();
        assert_eq!(tracked.iter().collect::<String>(), "ABC");
    }

    #[test]
    fn empty_tracked_letters_rejected() {
        assert_eq!(
            TrackedLetters::parse("   "),
            Err(ConfigError::EmptyTrackedLetters)
        );
    }

    #[test]
    fn all_used_requires_every_letter() {
        let tracked = TrackedLetters::parse("abc").unwrap();
        let mut used: BTreeSet<char> = ['A', 'B', 'Z'].into_iter().collect();
        assert!(!tracked.all_used(&used));

        used.insert('C');
        assert!(tracked.all_used(&used));
    }

    #[test]
    fn default_config_values() {
        let config = GameConfig::default();
        assert_eq!(config.starting_lives(), 3);
        assert_eq!(config.max_lives(), 5);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn config_rejects_bad_lives() {
        assert!(matches!(
            GameConfig::new(0, 5, TrackedLetters::default()),
            Err(ConfigError::InvalidLives { .. })
        ));
        assert!(matches!(
            GameConfig::new(6, 5, TrackedLetters::default()),
            Err(ConfigError::InvalidLives { starting: 6, max: 5 })
        ));
        assert!(GameConfig::new(5, 5, TrackedLetters::default()).is_ok());
    }
}
