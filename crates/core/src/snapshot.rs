/// Read-only copy of session progression, for rendering and the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub level: u32,
    pub total_points: u32,
    pub consecutive_wins: u32,
    pub best_streak: u32,
    pub rounds_played: u32,
    pub rounds_won: u32,
}
