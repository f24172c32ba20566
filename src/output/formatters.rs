//! Formatting utilities for terminal output

use crate::game::LetterTile;

const FULL_HEART: char = '♥';
const EMPTY_HEART: char = '♡';

/// Lives as hearts, filled up to `lives` and hollow up to `max_lives`
#[must_use]
pub fn hearts(lives: u32, max_lives: u32) -> String {
    let filled = lives.min(max_lives) as usize;
    let empty = max_lives as usize - filled;

    let mut result = String::with_capacity(max_lives as usize * 3);
    result.extend(std::iter::repeat_n(FULL_HEART, filled));
    result.extend(std::iter::repeat_n(EMPTY_HEART, empty));
    result
}

/// Tracked letters with used ones replaced by a dot
#[must_use]
pub fn letter_strip(letters: &[LetterTile]) -> String {
    letters
        .iter()
        .map(|tile| if tile.used { '·' } else { tile.letter })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of a whole as a percentage string
#[must_use]
pub fn percent(share: f64) -> String {
    format!("{:5.1}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_fill_and_cap() {
        assert_eq!(hearts(3, 5), "♥♥♥♡♡");
        assert_eq!(hearts(0, 3), "♡♡♡");
        assert_eq!(hearts(7, 5), "♥♥♥♥♥");
    }

    #[test]
    fn letter_strip_masks_used_letters() {
        let tiles = [
            LetterTile {
                letter: 'A',
                used: true,
            },
            LetterTile {
                letter: 'B',
                used: false,
            },
            LetterTile {
                letter: 'C',
                used: true,
            },
        ];
        assert_eq!(letter_strip(&tiles), "·B·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(percent(0.5), " 50.0%");
        assert_eq!(percent(1.0), "100.0%");
    }
}
