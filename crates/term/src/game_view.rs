//! GameView: maps round and session state into styled text frames.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Hint, SessionSnapshot, Settlement};
use crate::frame::{Frame, LineStyle, Rgb};
use crate::input::GuessError;
use crate::types::{level_name, Direction, Proximity, MAX_ATTEMPTS, MAX_NUMBER, MIN_NUMBER};

const BANNER: LineStyle = LineStyle::fg(Rgb::new(90, 200, 250)).bold();
const PROMPT: LineStyle = LineStyle::fg(Rgb::new(200, 160, 255));
const INFO: LineStyle = LineStyle::fg(Rgb::new(220, 220, 220));
const HINT: LineStyle = LineStyle::fg(Rgb::new(250, 210, 90));
const WARNING: LineStyle = LineStyle::fg(Rgb::new(240, 90, 80));
const SUCCESS: LineStyle = LineStyle::fg(Rgb::new(110, 220, 120)).bold();
const FAILURE: LineStyle = LineStyle::fg(Rgb::new(240, 120, 120)).bold();

const HIGHER_PHRASES: [&str; 3] = [
    "The spirits whisper of higher numbers... 📈",
    "Your guess needs to ascend further! ⬆️",
    "The mystical forces point upward! 🔝",
];

const LOWER_PHRASES: [&str; 3] = [
    "The spirits speak of lower numbers... 📉",
    "Your guess must descend! ⬇️",
    "The mystical forces point downward! 🔽",
];

/// Phrase for a hint direction; out-of-pool indices wrap.
pub fn direction_phrase(direction: Direction, phrase: usize) -> &'static str {
    let pool = match direction {
        Direction::Higher => &HIGHER_PHRASES,
        Direction::Lower => &LOWER_PHRASES,
    };
    pool[phrase % pool.len()]
}

pub fn proximity_phrase(proximity: Proximity) -> &'static str {
    match proximity {
        Proximity::Far => "💫 You're quite far from the truth...",
        Proximity::Warmer => "💫 You're getting warmer...",
        Proximity::VeryClose => "💫 You're very close to enlightenment!",
    }
}

/// Text layout for every screen the player sees.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    pub fn welcome(&self) -> Frame {
        let mut f = Frame::new();
        f.push(BANNER, "╔════════════════════════════════════════╗");
        f.push(BANNER, "║      MYSTERIOUS NUMBER CHALLENGE       ║");
        f.push(BANNER, "║    Can you read the computer's mind?   ║");
        f.push(BANNER, "╚════════════════════════════════════════╝");
        f
    }

    pub fn name_prompt(&self) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.set_prompt(PROMPT, "🎮 Enter your challenger name: ");
        f
    }

    /// Header shown when a round starts at `level`.
    pub fn round_intro(&self, level: u32) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.push(
            BANNER,
            format!(
                "🌟 ROUND {} - {} LEVEL 🌟",
                level + 1,
                level_name(level)
            ),
        );
        f.push(
            INFO,
            format!(
                "💭 I'm thinking of a number between {} and {}",
                MIN_NUMBER, MAX_NUMBER
            ),
        );
        f.push(
            INFO,
            format!("🎯 You have {} crystal ball gazes to find it!", MAX_ATTEMPTS),
        );
        f
    }

    /// Remaining attempts as charges, then the guess prompt.
    pub fn guess_prompt(&self, remaining: u32) -> Frame {
        let mut f = Frame::new();
        f.blank();
        let charges = "○ ".repeat(remaining as usize);
        f.push(
            INFO,
            format!("💫 Crystal ball charges: {}({} left)", charges, remaining),
        );
        f.set_prompt(PROMPT, "🔮 Focus your mind and enter your guess: ");
        f
    }

    /// Re-prompt after rejected input. The charge line is not repeated.
    pub fn invalid_guess(&self, err: GuessError) -> Frame {
        let mut f = Frame::new();
        match err {
            GuessError::NotANumber => {
                f.push(WARNING, "⚠️ That's not a number! Focus harder!");
            }
            GuessError::OutOfRange(_) => {
                f.push(
                    WARNING,
                    format!(
                        "⚠️ Your mind wandered! Stay between {} and {}",
                        MIN_NUMBER, MAX_NUMBER
                    ),
                );
            }
        }
        f.set_prompt(PROMPT, "🔮 Focus your mind and enter your guess: ");
        f
    }

    pub fn hint(&self, hint: &Hint) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.push(HINT, direction_phrase(hint.direction, hint.phrase));
        if let Some(proximity) = hint.proximity {
            f.push(HINT, proximity_phrase(proximity));
        }
        f
    }

    pub fn victory(&self, name: &str, settled: &Settlement) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.push(
            SUCCESS,
            format!("🎉 EXTRAORDINARY MENTAL POWERS, {}! 🎉", name.to_uppercase()),
        );
        f.push(
            INFO,
            format!(
                "✨ You unveiled the mystery in {} attempts!",
                settled.outcome.attempts
            ),
        );
        let points = settled.points.unwrap_or_default();
        f.push(
            INFO,
            format!(
                "💫 Round Points: {} (base {} + level {} + streak {})",
                points.total, points.base, points.level_bonus, points.streak_bonus
            ),
        );
        f.push(INFO, format!("🏆 Total Points: {}", settled.total_points));
        f.push(INFO, format!("⭐ Consecutive Wins: {}", settled.streak_after));
        f.push(
            INFO,
            format!("📈 Current Level: {}", level_name(settled.level_after)),
        );
        f
    }

    pub fn defeat(&self, name: &str, settled: &Settlement) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.push(
            FAILURE,
            format!("💔 The crystal ball has gone dark, {}!", name),
        );
        f.push(
            INFO,
            format!("🎲 The mystery number was: {}", settled.outcome.secret),
        );
        if settled.level_after < settled.level_before {
            f.push(
                INFO,
                format!(
                    "📉 You've been demoted to {} level",
                    level_name(settled.level_after)
                ),
            );
        } else {
            f.push(
                INFO,
                format!("📉 You remain at {} level", level_name(settled.level_after)),
            );
        }
        f
    }

    pub fn continue_prompt(&self) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.set_prompt(PROMPT, "🎯 Shall we consult the crystal ball again? (Y/N): ");
        f
    }

    pub fn final_summary(&self, name: &str, snap: &SessionSnapshot) -> Frame {
        let mut f = Frame::new();
        f.blank();
        f.push(BANNER, "╔════════════════════════════════════════╗");
        f.push(BANNER, "║             FINAL PROPHECY             ║");
        f.push(BANNER, "╚════════════════════════════════════════╝");
        f.push(INFO, format!("🌟 Mystic: {}", name));
        f.push(INFO, format!("🏆 Final Level: {}", level_name(snap.level)));
        f.push(INFO, format!("💫 Total Points: {}", snap.total_points));
        f.push(INFO, format!("✨ Final Streak: {}", snap.consecutive_wins));
        f.push(INFO, format!("🔥 Best Streak: {}", snap.best_streak));
        f.push(
            INFO,
            format!(
                "🎲 Rounds Won: {} of {}",
                snap.rounds_won, snap.rounds_played
            ),
        );
        f.blank();
        f.push(BANNER, "The crystal ball awaits your return...");
        f
    }
}
