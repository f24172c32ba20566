//! Tick scheduling for real-time drivers

use std::time::{Duration, Instant};

/// Measures elapsed time for the active turn
///
/// The clock remembers which turn it last measured. When the session moves to a
/// new turn the measurement restarts, so time spent in the previous turn never
/// leaks into the next one.
#[derive(Debug, Clone, Copy)]
pub struct TurnClock {
    turn: u64,
    last: Instant,
    interval: Duration,
}

impl TurnClock {
    #[must_use]
    pub const fn new(turn: u64, now: Instant, interval: Duration) -> Self {
        Self {
            turn,
            last: now,
            interval,
        }
    }

    /// Elapsed time to apply to `turn`, if a tick is due
    ///
    /// Returns `None` when the interval has not passed yet, or when `turn` differs
    /// from the measured one. In the latter case the clock restarts from `now`.
    pub fn due(&mut self, turn: u64, now: Instant) -> Option<Duration> {
        if turn != self.turn {
            self.restart(turn, now);
            return None;
        }

        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.interval {
            return None;
        }

        self.last = now;
        Some(elapsed)
    }

    /// Take all elapsed time for `turn` regardless of the interval
    pub fn drain(&mut self, turn: u64, now: Instant) -> Duration {
        if turn != self.turn {
            self.restart(turn, now);
            return Duration::ZERO;
        }

        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }

    /// Start measuring `turn` from `now`
    pub fn restart(&mut self, turn: u64, now: Instant) {
        self.turn = turn;
        self.last = now;
    }

    /// Time left before the next tick is due; usable as an input poll timeout
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    #[inline]
    #[must_use]
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
