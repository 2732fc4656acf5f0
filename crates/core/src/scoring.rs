//! Scoring module - round points and level movement
//!
//! A solved round pays:
//! - `(MAX_ATTEMPTS - attempts + 1) * 100` base points (the winning guess counts as used)
//! - `level * 50` for the level held when the round was played
//! - `streak * 25` for the consecutive wins before this one
//!
//! Level and streak are always the values from *before* the round is settled.
//! A lost round pays nothing.

use crate::types::{
    LAST_LEVEL, LEVEL_BONUS, MAX_ATTEMPTS, POINTS_PER_SPARE_ATTEMPT, STREAK_BONUS,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Points for attempts left over (plus the winning attempt).
    pub base: u32,
    pub level_bonus: u32,
    pub streak_bonus: u32,
    pub total: u32,
}

/// Base points for solving in `attempts` valid guesses.
///
/// Attempts beyond the cap pay nothing rather than underflowing.
pub fn calculate_base_points(attempts: u32) -> u32 {
    (MAX_ATTEMPTS + 1).saturating_sub(attempts) * POINTS_PER_SPARE_ATTEMPT
}

/// Calculate complete points for a solved round.
pub fn calculate_round_points(attempts: u32, level: u32, streak: u32) -> ScoreBreakdown {
    let base = calculate_base_points(attempts);
    let level_bonus = level.saturating_mul(LEVEL_BONUS);
    let streak_bonus = streak.saturating_mul(STREAK_BONUS);
    let total = base.saturating_add(level_bonus).saturating_add(streak_bonus);

    ScoreBreakdown {
        base,
        level_bonus,
        streak_bonus,
        total,
    }
}

/// Level after a win (capped at the top tier)
pub fn promote(level: u32) -> u32 {
    level.saturating_add(1).min(LAST_LEVEL)
}

/// Level after a loss (floored at the first tier)
pub fn demote(level: u32) -> u32 {
    level.saturating_sub(1).min(LAST_LEVEL)
}
