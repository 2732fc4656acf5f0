//! Line mapping from raw terminal input to game inputs.

use std::fmt;

use crate::types::{MAX_NUMBER, MIN_NUMBER};

/// Why a guess line was rejected. Both cases re-prompt without using an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Text did not parse as an integer.
    NotANumber,
    /// Parsed, but outside `[MIN_NUMBER, MAX_NUMBER]`.
    OutOfRange(i32),
}

impl GuessError {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessError::NotANumber => "not_a_number",
            GuessError::OutOfRange(_) => "out_of_range",
        }
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::NotANumber => write!(f, "guess is not a number"),
            GuessError::OutOfRange(v) => write!(
                f,
                "guess {} is outside {}..={}",
                v, MIN_NUMBER, MAX_NUMBER
            ),
        }
    }
}

impl std::error::Error for GuessError {}

/// Map one input line to a guess.
///
/// Surrounding whitespace (including the line terminator) is ignored.
pub fn parse_guess(line: &str) -> Result<u32, GuessError> {
    let value: i32 = line.trim().parse().map_err(|_| GuessError::NotANumber)?;
    if value < MIN_NUMBER as i32 || value > MAX_NUMBER as i32 {
        return Err(GuessError::OutOfRange(value));
    }
    Ok(value as u32)
}

/// Check if a continue-prompt answer means "play again".
///
/// The answer is trimmed and lower-cased; anything starting with `y` continues.
pub fn wants_another_round(line: &str) -> bool {
    line.trim().to_lowercase().starts_with('y')
}

/// Player name as entered, without surrounding whitespace.
pub fn normalize_name(line: &str) -> String {
    line.trim().to_string()
}
