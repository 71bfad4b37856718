//! Scoring module - classic line-clear scoring, leveling and gravity speed
//!
//! - Clearing `n` lines at level `L` awards `LINE_POINTS[min(n, 4)] * L`.
//! - The level is always derived from the cleared-line total: `lines / 10 + 1`.
//! - Gravity starts at 1000ms per row and speeds up 100ms per level, floored at 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_POINTS,
};

/// Points for clearing `lines` rows at once on `level` (1-based).
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    let base = LINE_POINTS[lines.min(LINE_POINTS.len() - 1)];
    base.saturating_mul(level)
}

/// Level reached after clearing `lines` rows in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for `level` in milliseconds.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
