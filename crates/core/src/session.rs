//! Session state module - progression carried from round to round
//!
//! The session owns level, points and streak. Rounds never touch it directly;
//! the driver hands each [`RoundOutcome`] to [`SessionState::settle`].

use crate::scoring::{calculate_round_points, demote, promote, ScoreBreakdown};
use crate::snapshot::SessionSnapshot;
use crate::types::{RoundOutcome, LAST_LEVEL};

/// How one round changed the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: RoundOutcome,
    /// Points awarded; `None` for a lost round.
    pub points: Option<ScoreBreakdown>,
    pub level_before: u32,
    pub level_after: u32,
    pub streak_after: u32,
    pub total_points: u32,
}

impl Settlement {
    pub fn round_points(&self) -> u32 {
        self.points.map(|p| p.total).unwrap_or(0)
    }
}

/// Progression for one player session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    level: u32,
    total_points: u32,
    consecutive_wins: u32,
    best_streak: u32,
    rounds_played: u32,
    rounds_won: u32,
}

impl SessionState {
    /// Fresh session: Rookie, no points, no streak
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn consecutive_wins(&self) -> u32 {
        self.consecutive_wins
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Apply a finished round.
    ///
    /// Points use the level and streak held *before* this round.
    pub fn settle(&mut self, outcome: RoundOutcome) -> Settlement {
        let level_before = self.level;
        self.rounds_played += 1;

        let points = if outcome.solved {
            let points =
                calculate_round_points(outcome.attempts, self.level, self.consecutive_wins);
            self.total_points = self.total_points.saturating_add(points.total);
            self.consecutive_wins += 1;
            self.best_streak = self.best_streak.max(self.consecutive_wins);
            self.rounds_won += 1;
            self.level = promote(self.level);
            Some(points)
        } else {
            self.consecutive_wins = 0;
            self.level = demote(self.level);
            None
        };

        debug_assert!(self.level <= LAST_LEVEL);

        Settlement {
            outcome,
            points,
            level_before,
            level_after: self.level,
            streak_after: self.consecutive_wins,
            total_points: self.total_points,
        }
    }

    /// Create a snapshot of the current progression
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Write the current progression into an existing snapshot
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.level = self.level;
        out.total_points = self.total_points;
        out.consecutive_wins = self.consecutive_wins;
        out.best_streak = self.best_streak;
        out.rounds_played = self.rounds_played;
        out.rounds_won = self.rounds_won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(attempts: u32) -> RoundOutcome {
        RoundOutcome {
            solved: true,
            attempts,
            secret: 50,
        }
    }

    fn loss() -> RoundOutcome {
        RoundOutcome {
            solved: false,
            attempts: 7,
            secret: 50,
        }
    }

    #[test]
    fn test_new_session_is_zeroed() {
        let s = SessionState::new();
        assert_eq!(s.level(), 0);
        assert_eq!(s.total_points(), 0);
        assert_eq!(s.consecutive_wins(), 0);
        assert_eq!(s.rounds_played(), 0);
    }

    #[test]
    fn test_first_win_in_three() {
        let mut s = SessionState::new();
        let settled = s.settle(win(3));

        assert_eq!(settled.round_points(), 500);
        assert_eq!(settled.level_before, 0);
        assert_eq!(settled.level_after, 1);
        assert_eq!(s.level(), 1);
        assert_eq!(s.consecutive_wins(), 1);
        assert_eq!(s.total_points(), 500);
    }

    #[test]
    fn test_points_use_pre_update_level_and_streak() {
        let mut s = SessionState::new();
        s.settle(win(7)); // 100, level 0 -> 1, streak 1
        s.settle(win(7)); // 100 + 50 + 25, level 1 -> 2, streak 2
        assert_eq!(s.total_points(), 100 + 175);

        let third = s.settle(win(3));
        // level 2, streak 2 before this round
        assert_eq!(third.round_points(), 500 + 100 + 50);
    }

    #[test]
    fn test_loss_resets_streak_and_demotes() {
        let mut s = SessionState::new();
        s.settle(win(2));
        s.settle(win(2));
        s.settle(win(2));
        assert_eq!(s.consecutive_wins(), 3);
        assert_eq!(s.level(), 3);
        let points_before = s.total_points();

        let settled = s.settle(loss());
        assert_eq!(settled.points, None);
        assert_eq!(settled.round_points(), 0);
        assert_eq!(s.consecutive_wins(), 0);
        assert_eq!(s.level(), 2);
        assert_eq!(s.total_points(), points_before);
        assert_eq!(s.best_streak(), 3);
    }

    #[test]
    fn test_level_never_leaves_table() {
        let mut s = SessionState::new();
        for _ in 0..10 {
            s.settle(win(1));
            assert!(s.level() <= LAST_LEVEL);
        }
        assert_eq!(s.level(), LAST_LEVEL);

        for _ in 0..10 {
            s.settle(loss());
        }
        assert_eq!(s.level(), 0);
    }

    #[test]
    fn test_round_counters() {
        let mut s = SessionState::new();
        s.settle(win(4));
        s.settle(loss());
        s.settle(win(4));
        assert_eq!(s.rounds_played(), 3);
        assert_eq!(s.rounds_won(), 2);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut s = SessionState::new();
        s.settle(win(3));
        let snap = s.snapshot();
        assert_eq!(snap.level, 1);
        assert_eq!(snap.total_points, 500);
        assert_eq!(snap.consecutive_wins, 1);
        assert_eq!(snap.best_streak, 1);
        assert_eq!(snap.rounds_played, 1);
        assert_eq!(snap.rounds_won, 1);
    }
}
