//! The executor: applies a validated action and advances the turn machine.
//!
//! Callers are responsible for validating with `is_legal` first; executing
//! an illegal action is a contract violation, caught by a debug assertion
//! rather than silently corrupting state. Draw-pile exhaustion during a
//! refill is not an error - it is the designed terminal transition and
//! simply flips the flag.

use crate::core::card::{count_of, remove_one, Good};
use crate::core::state::{GameState, HERD_BONUS};
use crate::core::{Action, ActionRecord, Seat};

use super::legality::is_legal;

/// Apply a legal action for the active seat, record it, and pass the turn.
///
/// Precondition: `is_legal(state, action)`.
pub fn execute(state: &mut GameState, action: &Action) {
    debug_assert!(
        is_legal(state, action),
        "execute called with an illegal action: {action:?}"
    );

    let seat = state.active_seat();
    match action {
        Action::TakeCamels => take_camels(state, seat),
        Action::TakeSingle(good) => take_single(state, seat, *good),
        Action::Sell(cards) => sell(state, seat, cards),
        Action::Swap { put, take } => swap(state, seat, put, take),
    }

    state.history.push_back(ActionRecord {
        seat,
        action: action.clone(),
    });
    state.active = seat.opponent();
}

/// One-time end-of-game bonus to the larger herd. No bonus on a tie.
pub fn award_herd_bonus(state: &mut GameState) {
    if state.herd_bonus_awarded {
        return;
    }
    state.herd_bonus_awarded = true;

    let a = state.players[Seat::A].herd;
    let b = state.players[Seat::B].herd;
    if a > b {
        state.players[Seat::A].score += HERD_BONUS;
    } else if b > a {
        state.players[Seat::B].score += HERD_BONUS;
    }
}

fn take_camels(state: &mut GameState, seat: Seat) {
    let taken = count_of(&state.market, Good::Camel);
    state.players[seat].herd += taken as u32;
    state.market.retain(|&c| c != Good::Camel);
    refill_market(state, taken);
}

fn take_single(state: &mut GameState, seat: Seat, good: Good) {
    remove_one(&mut state.market, good);
    state.players[seat].hand.push(good);
    refill_market(state, 1);
}

/// Draw `count` replacements into the market, or end the game if the pile
/// cannot supply them. Cards already removed stay removed on failure.
fn refill_market(state: &mut GameState, count: usize) {
    if state.deck.len() < count {
        state.failed_to_refill = true;
        return;
    }
    for _ in 0..count {
        if let Some(card) = state.deck.pop() {
            state.market.push(card);
        }
    }
}

fn sell(state: &mut GameState, seat: Seat, cards: &[Good]) {
    let Some(&good) = cards.first() else {
        return;
    };
    let count = cards.len();

    // Set bonus first. An already-exhausted bonus stack awards nothing;
    // this can happen in the endgame race toward the three-empty-stacks
    // terminal condition.
    if let Some(bonus) = state.bonus_tokens.get_mut(&count) {
        if let Some(value) = bonus.pop() {
            state.players[seat].score += value;
        }
    }

    // One payout token per card, stopping early once the stack empties.
    if let Some(stack) = state.goods_tokens.get_mut(&good) {
        for _ in 0..count {
            match stack.pop() {
                Some(value) => state.players[seat].score += value,
                None => break,
            }
        }
    }

    for &card in cards {
        remove_one(&mut state.players[seat].hand, card);
    }
    // A sale never refills the market.
}

fn swap(state: &mut GameState, seat: Seat, put: &[Good], take: &[Good]) {
    for &card in take {
        remove_one(&mut state.market, card);
        state.players[seat].hand.push(card);
    }
    for &card in put {
        if card == Good::Camel {
            // Placed camels come out of the herd, not the hand.
            state.players[seat].herd -= 1;
        } else {
            remove_one(&mut state.players[seat].hand, card);
        }
        state.market.push(card);
    }
    // No draw-pile interaction on a swap.
}
