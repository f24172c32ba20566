//! Presentation projection of a round
//!
//! The core never draws anything. Front ends render a `RoundView` instead, which
//! is a plain snapshot derived from `RoundState`.

use super::round::{Phase, RoundState};
use crate::core::Fragment;

/// Fragment display before any game has started
pub const IDLE_TEXT: &str = "...";

/// Fragment display when no fragment meets the difficulty threshold
pub const NO_FRAGMENT_TEXT: &str = "N/A";

/// Fragment display once the last life is lost
pub const GAME_OVER_TEXT: &str = "BOOM!";

/// Time fraction at or below which the timer is shown as running low
pub const LOW_TIME_FRACTION: f64 = 0.25;

/// One tile of the tracked alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTile {
    pub letter: char,
    pub used: bool,
}

/// Snapshot of everything a front end shows
#[derive(Debug, Clone, PartialEq)]
pub struct RoundView {
    pub phase: Phase,
    pub fragment_text: String,
    pub fragment: Option<Fragment>,
    /// Remaining time over turn duration, in [0, 1]
    pub time_fraction: f64,
    pub remaining_seconds: f64,
    pub low_time: bool,
    pub lives: u32,
    pub max_lives: u32,
    pub letters: Vec<LetterTile>,
    pub words_accepted: usize,
    pub bonuses_awarded: usize,
}

impl RoundView {
    #[must_use]
    pub fn project(round: &RoundState) -> Self {
        let fragment = round.challenge().map(super::selector::Challenge::fragment);

        let fragment_text = match (round.phase(), fragment) {
            (Phase::Idle, _) => IDLE_TEXT.to_string(),
            (Phase::GameOver, _) => GAME_OVER_TEXT.to_string(),
            (Phase::InTurn, Some(fragment)) => fragment.to_string(),
            (Phase::InTurn, None) => NO_FRAGMENT_TEXT.to_string(),
        };

        let time_fraction = match round.phase() {
            Phase::InTurn => round.time_fraction(),
            Phase::Idle | Phase::GameOver => 0.0,
        };

        let letters = round
            .config()
            .tracked_letters()
            .iter()
            .map(|letter| LetterTile {
                letter,
                used: round.used_letters().contains(&letter),
            })
            .collect();

        Self {
            phase: round.phase(),
            fragment_text,
            fragment,
            time_fraction,
            remaining_seconds: round.remaining_seconds(),
            low_time: round.phase() == Phase::InTurn && time_fraction <= LOW_TIME_FRACTION,
            lives: round.lives_remaining(),
            max_lives: round.config().max_lives(),
            letters,
            words_accepted: round.words_accepted(),
            bonuses_awarded: round.bonuses_awarded(),
        }
    }

    /// Number of tracked letters used so far
    #[must_use]
    pub fn letters_used(&self) -> usize {
        self.letters.iter().filter(|tile| tile.used).count()
    }
}

/// Typed input split around the first occurrence of the fragment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlight {
    pub before: String,
    pub matched: String,
    pub after: String,
}

/// Split `input` around the first case-insensitive occurrence of `fragment`
///
/// The casing of `input` is kept as typed. Without a fragment or a match the whole
/// input lands in `before`.
///
/// # Examples
/// ```
/// use word_bomb::core::Fragment;
/// use word_bomb::game::highlight_fragment;
///
/// let fragment = Fragment::new("cat").unwrap();
/// let parts = highlight_fragment("sCatter", Some(&fragment));
/// assert_eq!((parts.before.as_str(), parts.matched.as_str(), parts.after.as_str()), ("s", "Cat", "ter"));
/// ```
#[must_use]
pub fn highlight_fragment(input: &str, fragment: Option<&Fragment>) -> Highlight {
    let chars: Vec<char> = input.chars().collect();

    let Some(fragment) = fragment else {
        return Highlight {
            before: input.to_string(),
            ..Highlight::default()
        };
    };

    let target = fragment.chars();
    let position = chars.windows(target.len()).position(|window| {
        window
            .iter()
            .zip(target)
            .all(|(&typed, &wanted)| uppercase_char(typed) == wanted)
    });

    match position {
        Some(start) => {
            let end = start + target.len();
            Highlight {
                before: chars[..start].iter().collect(),
                matched: chars[start..end].iter().collect(),
                after: chars[end..].iter().collect(),
            }
        }
        None => Highlight {
            before: input.to_string(),
            ..Highlight::default()
        },
    }
}

// Single-char uppercase keeps positions aligned with the typed text
fn uppercase_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::{GameConfig, TrackedLetters};
    use crate::game::difficulty::DifficultyProfile;
    use crate::game::selector::Challenge;
    use crate::index::FragmentIndex;
    use crate::lexicon::Lexicon;

    fn example_index() -> FragmentIndex {
        FragmentIndex::build(&Lexicon::from_entries(["cat", "catalog", "scatter"]))
    }

    fn cat(index: &FragmentIndex) -> Option<Challenge> {
        Challenge::from_index(index, Fragment::new("cat").unwrap())
    }

    #[test]
    fn idle_view_shows_placeholder() {
        let round = RoundState::new(GameConfig::default());
        let view = RoundView::project(&round);

        assert_eq!(view.fragment_text, IDLE_TEXT);
        assert_eq!(view.phase, Phase::Idle);
        assert_eq!(view.lives, 3);
        assert_eq!(view.max_lives, 5);
        assert_eq!(view.letters.len(), 25);
        assert!(!view.low_time);
    }

    #[test]
    fn in_turn_view_tracks_time_and_letters() {
        let index = example_index();
        let mut round = RoundState::new(GameConfig::default());
        let profile = DifficultyProfile::new("Test", 1, 4.0).unwrap();
        round.start_game(&profile, cat(&index));

        round.submit_word("cat", || cat(&index)).unwrap();
        round.tick(3.0, || None).unwrap();

        let view = RoundView::project(&round);
        assert_eq!(view.fragment_text, "CAT");
        assert!((view.time_fraction - 0.25).abs() < 1e-9);
        assert!(view.low_time);
        assert_eq!(view.letters_used(), 3);
        assert_eq!(view.words_accepted, 1);
        assert!(
            view.letters
                .iter()
                .any(|tile| tile.letter == 'T' && tile.used)
        );
    }

    #[test]
    fn missing_fragment_shows_not_available() {
        let mut round = RoundState::new(GameConfig::default());
        round.start_game(&DifficultyProfile::new("Test", 1, 4.0).unwrap(), None);

        let view = RoundView::project(&round);
        assert_eq!(view.fragment_text, NO_FRAGMENT_TEXT);
        assert!(view.fragment.is_none());
        assert!((view.time_fraction - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn game_over_view_shows_boom() {
        let index = example_index();
        let config = GameConfig::new(1, 1, TrackedLetters::default()).unwrap();
        let mut round = RoundState::new(config);
        round.start_game(&DifficultyProfile::new("Test", 1, 4.0).unwrap(), cat(&index));
        round.lose_life(|| None).unwrap();

        let view = RoundView::project(&round);
        assert_eq!(view.fragment_text, GAME_OVER_TEXT);
        assert!(view.time_fraction.abs() < f64::EPSILON);
        assert_eq!(view.lives, 0);
    }

    #[test]
    fn highlight_finds_first_match_case_insensitively() {
        let fragment = Fragment::new("at").unwrap();
        let parts = highlight_fragment("cATat", Some(&fragment));
        assert_eq!(parts.before, "c");
        assert_eq!(parts.matched, "AT");
        assert_eq!(parts.after, "at");
    }

    #[test]
    fn highlight_without_match_keeps_input() {
        let fragment = Fragment::new("dog").unwrap();
        let parts = highlight_fragment("cat", Some(&fragment));
        assert_eq!(parts.before, "cat");
        assert!(parts.matched.is_empty());
        assert!(parts.after.is_empty());

        let no_fragment = highlight_fragment("cat", None);
        assert_eq!(no_fragment.before, "cat");
    }

    #[test]
    fn highlight_short_input() {
        let fragment = Fragment::new("cat").unwrap();
        assert_eq!(highlight_fragment("c", Some(&fragment)).before, "c");
        assert_eq!(highlight_fragment("", Some(&fragment)), Highlight::default());
    }
}
