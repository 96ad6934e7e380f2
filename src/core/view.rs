//! Per-seat partial-information projection of the game state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::card::Good;
use super::economy::TokenStack;

/// What one player is allowed to see.
///
/// Built fresh from `GameState::view` before every strategy call - views
/// are snapshots, never incrementally synchronized copies. The opponent's
/// hand appears only as a count; there is deliberately no way to iterate
/// it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerView {
    pub(crate) hand: Vec<Good>,
    pub(crate) herd: u32,
    pub(crate) opponent_herd: u32,
    pub(crate) opponent_hand_size: usize,
    pub(crate) market: Vec<Good>,
    pub(crate) goods_tokens: FxHashMap<Good, TokenStack>,
}

impl PlayerView {
    /// Own hand, exact.
    #[must_use]
    pub fn hand(&self) -> &[Good] {
        &self.hand
    }

    /// Own herd size.
    #[must_use]
    pub fn herd(&self) -> u32 {
        self.herd
    }

    /// Opponent's herd size (public).
    #[must_use]
    pub fn opponent_herd(&self) -> u32 {
        self.opponent_herd
    }

    /// How many cards the opponent holds. Their identities stay hidden.
    #[must_use]
    pub fn opponent_hand_size(&self) -> usize {
        self.opponent_hand_size
    }

    /// The shared market (public).
    #[must_use]
    pub fn market(&self) -> &[Good] {
        &self.market
    }

    /// Remaining payout stack for a good (public). `None` for the camel.
    #[must_use]
    pub fn tokens(&self, good: Good) -> Option<&TokenStack> {
        self.goods_tokens.get(&good)
    }

    /// Every legal action from this position.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        crate::rules::all_legal_actions(&self.hand, self.herd, &self.market)
    }
}
