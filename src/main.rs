//! Terminal number-guessing runner (default binary).
//!
//! Reads guesses line by line from stdin and writes plain or colored text to
//! stdout. Closing stdin ends the session gracefully with the final summary.

use anyhow::Result;

use mystery_number::core::{SessionState, SimpleRng};
use mystery_number::engine::{Arcade, GameConfig, Journal};
use mystery_number::term::{stdout_is_tty, StdConsole};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let seed = config.resolve_seed();

    let console = StdConsole::stdio(config.use_color(stdout_is_tty()));
    let journal = Journal::from_config(&config);
    let mut arcade = Arcade::new(console, SimpleRng::new(seed), journal).with_seed(seed);

    let mut session = SessionState::new();
    arcade.run_session(&mut session)?;
    Ok(())
}
