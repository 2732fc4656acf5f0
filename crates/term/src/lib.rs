//! Terminal text module.
//!
//! This is a small, game-oriented output layer for line-based terminal play.
//! Screens are built as [`Frame`]s of styled lines by the pure [`GameView`],
//! then flushed by a [`Console`] that also reads the player's answers.
//!
//! Goals:
//! - Keep `core` deterministic and free of wording
//! - Keep all player-facing text in one testable place
//! - Fall back to plain text when color is disabled or stdout is not a TTY

pub mod console;
pub mod frame;
pub mod game_view;

pub use mystery_number_core as core;
pub use mystery_number_input as input;
pub use mystery_number_types as types;

pub use console::{encode_frame_into, stdout_is_tty, Console, StdConsole};
pub use frame::{Frame, Line, LineStyle, Rgb};
pub use game_view::{direction_phrase, proximity_phrase, GameView};
