//! Round state module - one secret number and the guesses made against it
//!
//! A round starts `Active` with a freshly drawn secret. Each valid guess uses one
//! attempt (a correct guess included). The round becomes `Solved` on a correct
//! guess, or `Exhausted` once [`MAX_ATTEMPTS`] misses have been made.

use arrayvec::ArrayVec;

use crate::hints::{hint_for, Hint};
use crate::rng::RandomSource;
use crate::types::{
    GuessVerdict, RoundOutcome, RoundStatus, MAX_ATTEMPTS, MAX_NUMBER, MIN_NUMBER,
};

const HISTORY_CAP: usize = MAX_ATTEMPTS as usize;

/// Result of submitting one valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessFeedback {
    /// 1-based attempt number this guess used.
    pub attempt: u32,
    pub guess: u32,
    pub verdict: GuessVerdict,
    /// Present for misses only.
    pub hint: Option<Hint>,
    /// Round status after this guess.
    pub status: RoundStatus,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: u32,
    attempts_used: u32,
    status: RoundStatus,
    guesses: ArrayVec<u32, HISTORY_CAP>,
}

impl RoundState {
    /// Start a round with a secret drawn uniformly from `[MIN_NUMBER, MAX_NUMBER]`
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(rng.next_inclusive(MIN_NUMBER, MAX_NUMBER))
    }

    /// Start a round with a known secret (clamped into range)
    pub fn with_secret(secret: u32) -> Self {
        Self {
            secret: secret.clamp(MIN_NUMBER, MAX_NUMBER),
            attempts_used: 0,
            status: RoundStatus::Active,
            guesses: ArrayVec::new(),
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Attempts still available
    pub fn remaining(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts_used
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Valid guesses made so far, in order
    pub fn guesses(&self) -> &[u32] {
        &self.guesses
    }

    /// Check a guess against the valid range
    pub fn accepts(guess: u32) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&guess)
    }

    /// Submit one guess.
    ///
    /// Returns `None` (and changes nothing) if the round is already over or the
    /// guess is outside `[MIN_NUMBER, MAX_NUMBER]`.
    pub fn submit<R: RandomSource + ?Sized>(
        &mut self,
        guess: u32,
        rng: &mut R,
    ) -> Option<GuessFeedback> {
        if self.is_over() || !Self::accepts(guess) {
            return None;
        }

        let remaining_before = self.remaining();
        self.attempts_used += 1;
        // Capacity is MAX_ATTEMPTS and is_over() stops submissions once it is reached.
        self.guesses.push(guess);

        let verdict = GuessVerdict::compare(guess, self.secret);
        let hint = hint_for(guess, self.secret, remaining_before, rng);

        self.status = if verdict == GuessVerdict::Correct {
            RoundStatus::Solved
        } else if self.attempts_used >= MAX_ATTEMPTS {
            RoundStatus::Exhausted
        } else {
            RoundStatus::Active
        };

        Some(GuessFeedback {
            attempt: self.attempts_used,
            guess,
            verdict,
            hint,
            status: self.status,
        })
    }

    /// Final outcome, once the round has resolved
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if !self.is_over() {
            return None;
        }
        Some(RoundOutcome {
            solved: self.status == RoundStatus::Solved,
            attempts: self.attempts_used,
            secret: self.secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::{Direction, Proximity};

    #[test]
    fn test_new_round_state() {
        let mut rng = SimpleRng::new(12345);
        let round = RoundState::new(&mut rng);

        assert!((MIN_NUMBER..=MAX_NUMBER).contains(&round.secret()));
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.remaining(), MAX_ATTEMPTS);
        assert_eq!(round.status(), RoundStatus::Active);
        assert!(round.outcome().is_none());
    }

    #[test]
    fn test_seeded_rounds_repeat() {
        let a = RoundState::new(&mut SimpleRng::new(77));
        let b = RoundState::new(&mut SimpleRng::new(77));
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn test_solve_on_third_guess() {
        let mut rng = SimpleRng::new(1);
        let mut round = RoundState::with_secret(42);

        let first = round.submit(10, &mut rng).unwrap();
        assert_eq!(first.attempt, 1);
        assert_eq!(first.hint.unwrap().direction, Direction::Higher);
        assert_eq!(first.status, RoundStatus::Active);

        let second = round.submit(80, &mut rng).unwrap();
        assert_eq!(second.hint.unwrap().direction, Direction::Lower);

        let third = round.submit(42, &mut rng).unwrap();
        assert_eq!(third.verdict, GuessVerdict::Correct);
        assert_eq!(third.hint, None);
        assert_eq!(third.status, RoundStatus::Solved);

        assert_eq!(
            round.outcome(),
            Some(RoundOutcome {
                solved: true,
                attempts: 3,
                secret: 42
            })
        );
        assert_eq!(round.guesses(), &[10, 80, 42]);
    }

    #[test]
    fn test_first_guess_solve_counts_one_attempt() {
        let mut rng = SimpleRng::new(1);
        let mut round = RoundState::with_secret(55);
        round.submit(55, &mut rng).unwrap();
        assert_eq!(round.outcome().unwrap().attempts, 1);
    }

    #[test]
    fn test_exhausted_after_seven_misses() {
        let mut rng = SimpleRng::new(1);
        let mut round = RoundState::with_secret(42);

        for i in 0..MAX_ATTEMPTS {
            assert!(!round.is_over());
            let fb = round.submit(1 + i, &mut rng).unwrap();
            assert_ne!(fb.verdict, GuessVerdict::Correct);
        }

        assert_eq!(round.status(), RoundStatus::Exhausted);
        assert_eq!(round.attempts_used(), MAX_ATTEMPTS);
        assert_eq!(round.guesses(), &[1, 2, 3, 4, 5, 6, 7]);
        let outcome = round.outcome().unwrap();
        assert!(!outcome.solved);
        assert_eq!(outcome.attempts, 7);
        assert_eq!(outcome.secret, 42);
    }

    #[test]
    fn test_submit_after_end_is_rejected() {
        let mut rng = SimpleRng::new(1);
        let mut round = RoundState::with_secret(42);
        round.submit(42, &mut rng).unwrap();

        assert!(round.submit(42, &mut rng).is_none());
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn test_out_of_range_guess_does_not_use_attempt() {
        let mut rng = SimpleRng::new(1);
        let mut round = RoundState::with_secret(42);

        assert!(round.submit(0, &mut rng).is_none());
        assert!(round.submit(101, &mut rng).is_none());
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.status(), RoundStatus::Active);
    }

    #[test]
    fn test_proximity_on_last_two_attempts_only() {
        let mut rng = SimpleRng::new(1);
        let mut round = RoundState::with_secret(50);

        for _ in 0..5 {
            let fb = round.submit(1, &mut rng).unwrap();
            assert_eq!(fb.hint.unwrap().proximity, None);
        }

        // Sixth guess: two attempts were left before it.
        let sixth = round.submit(35, &mut rng).unwrap();
        assert_eq!(sixth.hint.unwrap().proximity, Some(Proximity::Warmer));

        // Seventh (final) guess still gets its hint.
        let seventh = round.submit(55, &mut rng).unwrap();
        assert_eq!(seventh.hint.unwrap().proximity, Some(Proximity::VeryClose));
        assert_eq!(seventh.status, RoundStatus::Exhausted);
    }

    #[test]
    fn test_with_secret_clamps() {
        assert_eq!(RoundState::with_secret(0).secret(), MIN_NUMBER);
        assert_eq!(RoundState::with_secret(500).secret(), MAX_NUMBER);
    }
}
