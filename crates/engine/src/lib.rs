//! Game driver: wires the pure rules to a console, a random source and the
//! event log.
//!
//! - [`config`]: environment-driven [`GameConfig`]
//! - [`journal`]: JSON-lines [`Journal`] of session events
//! - [`round`]: prompting for guesses and playing one round
//! - [`session`]: the [`Arcade`] session loop
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use mystery_number_engine::core::{SessionState, SimpleRng};
//! use mystery_number_engine::term::Console;
//! use mystery_number_engine::{Arcade, Journal};
//!
//! // Seven guesses of 1 resolve the round either way; then the player declines.
//! let input = "Ada\n1\n1\n1\n1\n1\n1\n1\nn\n";
//! let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
//! let mut arcade = Arcade::new(console, SimpleRng::new(7), Journal::disabled());
//!
//! let mut session = SessionState::new();
//! let report = arcade.run_session(&mut session).unwrap();
//! assert_eq!(report.player, "Ada");
//! assert_eq!(session.rounds_played(), 1);
//! ```

pub mod config;
pub mod journal;
pub mod round;
pub mod session;

pub use mystery_number_core as core;
pub use mystery_number_input as input;
pub use mystery_number_term as term;
pub use mystery_number_types as types;

pub use config::GameConfig;
pub use journal::{Journal, JournalEvent, SummaryRecord};
pub use session::{Arcade, SessionEnd, SessionReport};
