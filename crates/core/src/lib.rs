//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round rules, hint selection, scoring and session
//! progression. It has **zero dependencies** on terminal, files, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical secrets and hint phrasing
//! - **Testable**: Every rule is exercised without touching stdin/stdout
//! - **Portable**: The same rules can back a terminal, a test harness, or a bench
//!
//! # Module Structure
//!
//! - [`rng`]: Injectable [`RandomSource`] plus the seeded [`SimpleRng`]
//! - [`hints`]: Direction and late-round proximity hints for missed guesses
//! - [`round`]: One secret number and the guesses made against it
//! - [`scoring`]: Round points and level promotion/demotion
//! - [`session`]: Level, points and streak carried across rounds
//! - [`snapshot`]: Copyable view of session progression
//!
//! # Game Rules
//!
//! - The secret is drawn uniformly from 1..=100 at the start of each round
//! - Seven valid guesses per round; the winning guess counts as an attempt
//! - Every miss gets a "higher"/"lower" hint; the last two attempts also get a
//!   far / warmer / very close band
//! - A win pays `(8 - attempts) * 100 + level * 50 + streak * 25` and promotes
//! - A loss resets the streak and demotes (never below Rookie)
//!
//! # Example
//!
//! ```
//! use mystery_number_core::{RoundState, SessionState, SimpleRng};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut session = SessionState::new();
//!
//! let mut round = RoundState::with_secret(42);
//! round.submit(10, &mut rng);
//! round.submit(80, &mut rng);
//! round.submit(42, &mut rng);
//!
//! let settled = session.settle(round.outcome().unwrap());
//! assert_eq!(settled.round_points(), 500);
//! assert_eq!(session.level(), 1);
//! assert_eq!(session.consecutive_wins(), 1);
//! ```

pub mod hints;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use mystery_number_types as types;

// Re-export commonly used types for convenience
pub use hints::{Hint, PHRASES_PER_DIRECTION};
pub use rng::{RandomSource, SimpleRng};
pub use round::{GuessFeedback, RoundState};
pub use scoring::{calculate_round_points, ScoreBreakdown};
pub use session::{SessionState, Settlement};
pub use snapshot::SessionSnapshot;
