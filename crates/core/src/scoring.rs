//! Scoring module - score tables and the score-driven speed curves
//!
//! Both games get faster as the player does well. Snake shortens its tick as
//! score rises; Tetris shortens its gravity interval as the level rises. The
//! engines only report the interval, the driver schedules the ticks.

use crate::types::{
    BASE_DROP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS, SNAKE_SPEED_FAST_MS,
    SNAKE_SPEED_NORMAL_MS, SNAKE_SPEED_SCORE_DIVISOR,
};

/// Snake tick period for `score`
///
/// `max(SNAKE_SPEED_FAST_MS, SNAKE_SPEED_NORMAL_MS - score / 5)`; never
/// increases with score.
pub fn snake_speed_ms(score: u32) -> u32 {
    SNAKE_SPEED_NORMAL_MS
        .saturating_sub(score / SNAKE_SPEED_SCORE_DIVISOR)
        .max(SNAKE_SPEED_FAST_MS)
}

/// Tetris gravity interval for `level` (1-based), floored at 50ms
pub fn drop_interval_ms(level: u32) -> u32 {
    (BASE_DROP_MS / level.max(1)).max(MIN_DROP_MS)
}

/// Points for clearing `lines` rows at once on `level`
///
/// Uses the `LINE_SCORES` table; counts above four use the four-row entry.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Level reached after `lines` cumulative cleared rows (1-based)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}
