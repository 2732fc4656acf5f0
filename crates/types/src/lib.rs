//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! from the rules (`core`), the text layer (`term`) and the driver (`engine`).
//!
//! # Number Range
//!
//! Every round draws its secret from a fixed inclusive range:
//!
//! - **Minimum**: 1
//! - **Maximum**: 100
//! - **Attempts per round**: 7
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_SPARE_ATTEMPT` | 100 | Paid for each unused attempt, plus the winning one |
//! | `LEVEL_BONUS` | 50 | Paid per level held when the round was won |
//! | `STREAK_BONUS` | 25 | Paid per consecutive win before this one |
//!
//! # Levels
//!
//! | Index | Name |
//! |-------|------|
//! | 0 | Rookie |
//! | 1 | Explorer |
//! | 2 | Detective |
//! | 3 | Master |
//! | 4 | Psychic |
//!
//! # Examples
//!
//! ```
//! use mystery_number_types::{level_name, Direction, GuessVerdict, LAST_LEVEL, MAX_ATTEMPTS};
//!
//! assert_eq!(level_name(0), "Rookie");
//! assert_eq!(level_name(LAST_LEVEL), "Psychic");
//!
//! // Out-of-table indices clamp to the top tier.
//! assert_eq!(level_name(99), "Psychic");
//!
//! let verdict = GuessVerdict::compare(10, 42);
//! assert_eq!(verdict, GuessVerdict::TooLow);
//! assert_eq!(verdict.direction(), Some(Direction::Higher));
//!
//! assert_eq!(MAX_ATTEMPTS, 7);
//! ```

use std::cmp::Ordering;

/// Smallest secret number (inclusive)
pub const MIN_NUMBER: u32 = 1;

/// Largest secret number (inclusive)
pub const MAX_NUMBER: u32 = 100;

/// Valid guesses allowed per round
pub const MAX_ATTEMPTS: u32 = 7;

/// Proximity hints are shown once this many attempts (or fewer) remain.
pub const PROXIMITY_HINT_REMAINING: u32 = 2;

/// Distance above which a guess is "far"
pub const FAR_DISTANCE: u32 = 20;

/// Distance above which a guess is "warmer" (and at or below which it is "very close")
pub const WARM_DISTANCE: u32 = 10;

/// Base points per spare attempt (see [`MAX_ATTEMPTS`])
pub const POINTS_PER_SPARE_ATTEMPT: u32 = 100;

/// Bonus points per level held when the round was solved
pub const LEVEL_BONUS: u32 = 50;

/// Bonus points per consecutive win before the solved round
pub const STREAK_BONUS: u32 = 25;

/// Level names, indexed by level
pub const LEVEL_NAMES: [&str; 5] = ["Rookie", "Explorer", "Detective", "Master", "Psychic"];

/// Highest valid level index
pub const LAST_LEVEL: u32 = (LEVEL_NAMES.len() - 1) as u32;

/// Name for a level index, clamped to the top tier.
pub fn level_name(level: u32) -> &'static str {
    let idx = (level.min(LAST_LEVEL)) as usize;
    LEVEL_NAMES[idx]
}


/// Which way the next guess should move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Higher => "higher",
            Direction::Lower => "lower",
        }
    }
}

/// Distance band for the late-round proximity hint
///
/// - **Far**: more than [`FAR_DISTANCE`] away
/// - **Warmer**: more than [`WARM_DISTANCE`] away
/// - **VeryClose**: within [`WARM_DISTANCE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    Far,
    Warmer,
    VeryClose,
}

impl Proximity {
    /// Band an absolute distance between guess and secret
    ///
    /// # Examples
    ///
    /// ```
    /// use mystery_number_types::Proximity;
    ///
    /// assert_eq!(Proximity::from_distance(21), Proximity::Far);
    /// assert_eq!(Proximity::from_distance(20), Proximity::Warmer);
    /// assert_eq!(Proximity::from_distance(11), Proximity::Warmer);
    /// assert_eq!(Proximity::from_distance(10), Proximity::VeryClose);
    /// ```
    pub fn from_distance(distance: u32) -> Self {
        if distance > FAR_DISTANCE {
            Proximity::Far
        } else if distance > WARM_DISTANCE {
            Proximity::Warmer
        } else {
            Proximity::VeryClose
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Proximity::Far => "far",
            Proximity::Warmer => "warmer",
            Proximity::VeryClose => "very_close",
        }
    }
}

/// Result of comparing one valid guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessVerdict {
    Correct,
    /// Guess below the secret (player should go higher)
    TooLow,
    /// Guess above the secret (player should go lower)
    TooHigh,
}

impl GuessVerdict {
    pub fn compare(guess: u32, secret: u32) -> Self {
        match guess.cmp(&secret) {
            Ordering::Equal => GuessVerdict::Correct,
            Ordering::Less => GuessVerdict::TooLow,
            Ordering::Greater => GuessVerdict::TooHigh,
        }
    }

    /// Hint direction for a miss; `None` for a correct guess.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GuessVerdict::Correct => None,
            GuessVerdict::TooLow => Some(Direction::Higher),
            GuessVerdict::TooHigh => Some(Direction::Lower),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GuessVerdict::Correct => "correct",
            GuessVerdict::TooLow => "too_low",
            GuessVerdict::TooHigh => "too_high",
        }
    }
}

/// Lifecycle of a single round
///
/// `Active → Solved` on a correct guess, `Active → Exhausted` when the attempt cap
/// is reached. Both terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Active,
    Solved,
    Exhausted,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::Active)
    }
}

/// What a finished round reports back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOutcome {
    pub solved: bool,
    /// Valid guesses used, including the winning one.
    pub attempts: u32,
    pub secret: u32,
}
