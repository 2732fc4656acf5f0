//! Hint selection for missed guesses.
//!
//! The rules only decide *which* hint applies. Wording lives in the term crate,
//! indexed by [`Hint::phrase`].

use crate::rng::RandomSource;
use crate::types::{Direction, GuessVerdict, Proximity, PROXIMITY_HINT_REMAINING};

/// Phrasings available per direction
pub const PHRASES_PER_DIRECTION: u32 = 3;

/// Feedback for one missed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    pub direction: Direction,
    /// Index into the phrase pool for `direction`, in `0..PHRASES_PER_DIRECTION`.
    pub phrase: usize,
    /// Late-round distance band, present only when few attempts remain.
    pub proximity: Option<Proximity>,
}

/// Build the hint for a guess, or `None` when the guess was correct.
///
/// `remaining` is the number of attempts left *before* this guess was counted.
/// Consumes exactly one draw from `rng` on a miss and none on a hit.
pub fn hint_for<R: RandomSource + ?Sized>(
    guess: u32,
    secret: u32,
    remaining: u32,
    rng: &mut R,
) -> Option<Hint> {
    let direction = GuessVerdict::compare(guess, secret).direction()?;
    let phrase = rng.next_range(PHRASES_PER_DIRECTION) as usize;

    Some(Hint {
        direction,
        phrase,
        proximity: proximity_for(guess, secret, remaining),
    })
}

/// Proximity band, only once `remaining <= PROXIMITY_HINT_REMAINING`.
pub fn proximity_for(guess: u32, secret: u32, remaining: u32) -> Option<Proximity> {
    if remaining > PROXIMITY_HINT_REMAINING {
        return None;
    }
    Some(Proximity::from_distance(guess.abs_diff(secret)))
}
