//! Terminal input module (engine-facing).
//!
//! This module is independent of any terminal backend. It maps raw input lines
//! into guesses, continue answers and player names.

pub mod map;

pub use mystery_number_types as types;

pub use map::{normalize_name, parse_guess, wants_another_round, GuessError};
