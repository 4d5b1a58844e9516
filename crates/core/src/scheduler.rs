//! Gravity scheduler - the single repeating drop timer
//!
//! The game state decides after every transition whether gravity should run and
//! at which interval, then calls [`GravityTimer::sync`]. A changed answer cancels
//! the armed timer and arms a fresh one, so a pause or level-up never leaves a
//! stale interval behind. Time only moves when the host calls `advance`.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Armed {
    interval_ms: u32,
    elapsed_ms: u32,
}

/// At most one armed repeating timer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GravityTimer {
    armed: Option<Armed>,
    /// Bumped every time a timer is armed or cancelled
    generation: u32,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the armed timer match `desired` (`None` = no gravity)
    ///
    /// Returns true when the timer was cancelled or re-armed.
    pub fn sync(&mut self, desired: Option<u32>) -> bool {
        let desired = desired.map(|interval_ms| interval_ms.max(1));
        if self.interval_ms() == desired {
            return false;
        }

        self.armed = desired.map(|interval_ms| Armed {
            interval_ms,
            elapsed_ms: 0,
        });
        self.generation = self.generation.wrapping_add(1);
        debug!(
            interval_ms = ?desired,
            generation = self.generation,
            "gravity timer rescheduled"
        );
        true
    }

    /// Accumulate elapsed time; returns true if the timer fired
    ///
    /// At most one firing per call: the caller re-syncs and calls again with
    /// `0` to drain any backlog at the (possibly new) interval.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };

        armed.elapsed_ms = armed.elapsed_ms.saturating_add(elapsed_ms);
        if armed.elapsed_ms >= armed.interval_ms {
            armed.elapsed_ms -= armed.interval_ms;
            return true;
        }
        false
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.armed.map(|armed| armed.interval_ms)
    }

    /// Milliseconds until the next firing, if armed
    pub fn time_until_fire(&self) -> Option<u32> {
        self.armed
            .map(|armed| armed.interval_ms.saturating_sub(armed.elapsed_ms))
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
