//! Round driver: one secret, prompts until solved, exhausted, or input closes.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{RandomSource, RoundState};
use crate::input::parse_guess;
use crate::journal::JournalEvent;
use crate::session::Arcade;
use crate::types::RoundOutcome;

impl<R: BufRead, W: Write, G: RandomSource> Arcade<R, W, G> {
    /// Play one round at `level`.
    ///
    /// Returns `None` if input closed before the round resolved; the round is then
    /// abandoned and must not be settled.
    pub fn play_round(&mut self, round_no: u32, level: u32) -> Result<Option<RoundOutcome>> {
        let mut round = RoundState::new(&mut self.rng);

        self.console.show(&self.view.round_intro(level))?;
        self.journal
            .record(&JournalEvent::RoundStarted { round: round_no, level });

        while !round.is_over() {
            let Some(guess) = self.read_guess(round_no, round.remaining())? else {
                self.journal.record(&JournalEvent::RoundAbandoned {
                    round: round_no,
                    attempts: round.attempts_used(),
                    guesses: round.guesses().to_vec(),
                });
                return Ok(None);
            };

            let Some(feedback) = round.submit(guess, &mut self.rng) else {
                continue;
            };

            self.journal.record(&JournalEvent::Guess {
                round: round_no,
                attempt: feedback.attempt,
                value: feedback.guess,
                verdict: feedback.verdict.as_str().to_string(),
            });

            if let Some(hint) = feedback.hint {
                self.console.show(&self.view.hint(&hint))?;
            }
        }

        Ok(round.outcome())
    }

    /// Prompt until a valid in-range guess arrives. Rejected lines never use an attempt.
    ///
    /// Returns `None` once input is closed.
    pub fn read_guess(&mut self, round_no: u32, remaining: u32) -> Result<Option<u32>> {
        let mut frame = self.view.guess_prompt(remaining);
        loop {
            let Some(line) = self.console.ask(&frame)? else {
                return Ok(None);
            };
            match parse_guess(&line) {
                Ok(guess) => return Ok(Some(guess)),
                Err(err) => {
                    self.journal.record(&JournalEvent::InvalidInput {
                        round: round_no,
                        reason: err.as_str().to_string(),
                    });
                    frame = self.view.invalid_guess(err);
                }
            }
        }
    }
}
