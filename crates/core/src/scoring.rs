//! Scoring module - line clear points, leveling and gravity speed
//!
//! All three are pure functions of the running totals so the state machine can
//! recompute them after every lock.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Base points for clearing `lines` rows with one lock.
///
/// More than four rows cannot happen with the standard catalog and scores nothing.
pub fn score_for_lines(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Points awarded for a lock that cleared `lines` rows at `level`
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    score_for_lines(lines).saturating_mul(level)
}

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Get gravity interval for a level (in milliseconds)
/// Shrinks 80ms per level and is clamped at the 120ms floor
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_FLOOR_MS)
}
