//! Difficulty tiers
//!
//! A `DifficultyProfile` pairs a feasibility threshold with a turn duration. The
//! selector and round logic only ever see profiles, so a custom profile behaves
//! exactly like a built-in tier.

use super::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A named threshold/duration pair
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyProfile {
    name: String,
    min_candidate_words: usize,
    turn_seconds: f64,
}

impl DifficultyProfile {
    /// Create a profile
    ///
    /// # Errors
    /// Returns `ConfigError` if `min_candidate_words` is 0 or `turn_seconds` is not a
    /// positive finite number.
    pub fn new(
        name: impl Into<String>,
        min_candidate_words: usize,
        turn_seconds: f64,
    ) -> Result<Self, ConfigError> {
        if min_candidate_words == 0 {
            return Err(ConfigError::InvalidMinCandidates(min_candidate_words));
        }
        if !turn_seconds.is_finite() || turn_seconds <= 0.0 {
            return Err(ConfigError::InvalidTurnSeconds(turn_seconds));
        }

        Ok(Self {
            name: name.into(),
            min_candidate_words,
            turn_seconds,
        })
    }

    /// Copy of this profile with some fields replaced
    ///
    /// The result is named "Custom" when anything changes.
    ///
    /// # Errors
    /// Returns `ConfigError` if an override is out of range.
    pub fn with_overrides(
        &self,
        min_candidate_words: Option<usize>,
        turn_seconds: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if min_candidate_words.is_none() && turn_seconds.is_none() {
            return Ok(self.clone());
        }

        Self::new(
            "Custom",
            min_candidate_words.unwrap_or(self.min_candidate_words),
            turn_seconds.unwrap_or(self.turn_seconds),
        )
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum list length (duplicates included) for a fragment to be eligible
    #[inline]
    #[must_use]
    pub const fn min_candidate_words(&self) -> usize {
        self.min_candidate_words
    }

    #[inline]
    #[must_use]
    pub const fn turn_seconds(&self) -> f64 {
        self.turn_seconds
    }
}

impl fmt::Display for DifficultyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (≥{} words, {}s)",
            self.name, self.min_candidate_words, self.turn_seconds
        )
    }
}

/// Built-in difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Key used on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    #[must_use]
    pub const fn min_candidate_words(self) -> usize {
        match self {
            Self::Easy => 500,
            Self::Medium => 100,
            Self::Hard => 20,
            Self::Expert => 1,
        }
    }

    #[must_use]
    pub const fn turn_seconds(self) -> f64 {
        match self {
            Self::Easy => 10.0,
            Self::Medium => 8.0,
            Self::Hard => 6.0,
            Self::Expert => 5.0,
        }
    }

    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        DifficultyProfile {
            name: self.name().to_string(),
            min_candidate_words: self.min_candidate_words(),
            turn_seconds: self.turn_seconds(),
        }
    }

    /// Parse a tier key, ignoring case
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownDifficulty` for anything but the four keys.
    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(key.to_string()))
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_values() {
        let easy = Difficulty::Easy.profile();
        assert_eq!(easy.name(), "Easy");
        assert_eq!(easy.min_candidate_words(), 500);
        assert!((easy.turn_seconds() - 10.0).abs() < f64::EPSILON);

        let expert = Difficulty::Expert.profile();
        assert_eq!(expert.min_candidate_words(), 1);
        assert!((expert.turn_seconds() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiers_get_more_permissive_and_faster() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].min_candidate_words() > pair[1].min_candidate_words());
            assert!(pair[0].turn_seconds() > pair[1].turn_seconds());
        }
    }

    #[test]
    fn from_key_ignores_case() {
        assert_eq!(Difficulty::from_key("HARD"), Ok(Difficulty::Hard));
        assert_eq!("medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!(matches!(
            Difficulty::from_key("nightmare"),
            Err(ConfigError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn profile_validation() {
        assert!(matches!(
            DifficultyProfile::new("Zero", 0, 5.0),
            Err(ConfigError::InvalidMinCandidates(0))
        ));
        assert!(matches!(
            DifficultyProfile::new("Instant", 1, 0.0),
            Err(ConfigError::InvalidTurnSeconds(_))
        ));
        assert!(DifficultyProfile::new("Nan", 1, f64::NAN).is_err());
        assert!(DifficultyProfile::new("Ok", 1, 0.5).is_ok());
    }

    #[test]
    fn overrides_rename_to_custom() {
        let base = Difficulty::Medium.profile();
        assert_eq!(base.with_overrides(None, None).unwrap(), base);

        let custom = base.with_overrides(Some(42), None).unwrap();
        assert_eq!(custom.name(), "Custom");
        assert_eq!(custom.min_candidate_words(), 42);
        assert!((custom.turn_seconds() - 8.0).abs() < f64::EPSILON);

        assert!(base.with_overrides(None, Some(-1.0)).is_err());
    }
}
