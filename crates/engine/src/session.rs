//! Session driver: welcome, name, rounds until the player declines, summary.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{RandomSource, SessionSnapshot, SessionState};
use crate::input::{normalize_name, wants_another_round};
use crate::journal::{Journal, JournalEvent, SummaryRecord};
use crate::term::{Console, GameView};

/// Why the session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player answered anything not starting with "y".
    Declined,
    /// Input stream closed at a prompt.
    InputClosed,
}

/// What a finished session reports back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub player: String,
    pub summary: SessionSnapshot,
    pub end: SessionEnd,
}

/// Everything a session needs besides its progression: the console, the random
/// source and the event log.
pub struct Arcade<R, W, G> {
    pub(crate) console: Console<R, W>,
    pub(crate) rng: G,
    pub(crate) journal: Journal,
    pub(crate) view: GameView,
    seed: Option<u32>,
}

impl<R, W, G> Arcade<R, W, G> {
    pub fn new(console: Console<R, W>, rng: G, journal: Journal) -> Self {
        Self {
            console,
            rng,
            journal,
            view: GameView::new(),
            seed: None,
        }
    }

    /// Seed recorded in the event log (informational only).
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

impl<R: BufRead, W: Write, G: RandomSource> Arcade<R, W, G> {
    /// Run rounds until the player declines or input closes.
    ///
    /// Progression lives in `session`; it is only changed by settling resolved rounds.
    pub fn run_session(&mut self, session: &mut SessionState) -> Result<SessionReport> {
        self.console.show(&self.view.welcome())?;

        let (player, mut end) = match self.console.ask(&self.view.name_prompt())? {
            Some(line) => (normalize_name(&line), None),
            None => (String::new(), Some(SessionEnd::InputClosed)),
        };
        self.journal.record(&JournalEvent::SessionStarted {
            player: player.clone(),
            seed: self.seed,
        });

        while end.is_none() {
            let round_no = session.rounds_played() + 1;
            let Some(outcome) = self.play_round(round_no, session.level())? else {
                end = Some(SessionEnd::InputClosed);
                break;
            };

            let settled = session.settle(outcome);
            let frame = if outcome.solved {
                self.view.victory(&player, &settled)
            } else {
                self.view.defeat(&player, &settled)
            };
            self.console.show(&frame)?;
            self.journal.record(&JournalEvent::RoundResolved {
                round: round_no,
                solved: outcome.solved,
                attempts: outcome.attempts,
                secret: outcome.secret,
                points: settled.round_points(),
                level: settled.level_after,
                streak: settled.streak_after,
            });

            end = match self.console.ask(&self.view.continue_prompt())? {
                Some(answer) if wants_another_round(&answer) => None,
                Some(_) => Some(SessionEnd::Declined),
                None => Some(SessionEnd::InputClosed),
            };
        }

        let summary = session.snapshot();
        self.console
            .show(&self.view.final_summary(&player, &summary))?;
        self.journal.record(&JournalEvent::SessionFinished {
            summary: SummaryRecord::from(&summary),
        });

        Ok(SessionReport {
            player,
            summary,
            end: end.unwrap_or(SessionEnd::Declined),
        })
    }
}
