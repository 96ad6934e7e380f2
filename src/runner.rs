//! Driver loop: play one game between two strategies.
//!
//! The loop is the reference implementation of the orchestration contract:
//! project the active seat's view, ask its strategy, re-ask while the
//! proposal is illegal, execute, and repeat until the state machine goes
//! terminal; then apply the herd bonus and read the final scores.
//!
//! Games are fully independent - a host can run many of them across
//! threads with no shared state beyond the strategy objects it passes in.

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameState, Seat};
use crate::rules::{award_herd_bonus, execute, is_legal};
use crate::strategy::Strategy;

/// Final result of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seat A's final score, herd bonus included.
    pub score_a: i64,
    /// Seat B's final score, herd bonus included.
    pub score_b: i64,
    /// Number of executed actions.
    pub turns: usize,
}

impl GameOutcome {
    /// The winning seat, or `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(Seat::A),
            std::cmp::Ordering::Less => Some(Seat::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Play one seeded game to completion.
///
/// Every proposal is validated; illegal ones are re-requested without a
/// cap, per the strategy contract.
pub fn run_game(
    seat_a: &mut dyn Strategy,
    seat_b: &mut dyn Strategy,
    seed: u64,
) -> GameOutcome {
    let mut state = GameState::new(seed);

    while !state.is_over() {
        let seat = state.active_seat();
        let view = state.view(seat);
        let check = |action: &Action| is_legal(&state, action);

        let strategy: &mut dyn Strategy = match seat {
            Seat::A => seat_a,
            Seat::B => seat_b,
        };

        let mut action = strategy.propose(&view, &check);
        while !is_legal(&state, &action) {
            action = strategy.propose(&view, &check);
        }

        execute(&mut state, &action);
    }

    award_herd_bonus(&mut state);

    GameOutcome {
        score_a: state.score(Seat::A),
        score_b: state.score(Seat::B),
        turns: state.history().len(),
    }
}
