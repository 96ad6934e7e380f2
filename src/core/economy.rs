//! Token economy: payout stacks, set bonuses, and the draw pile.
//!
//! Goods token stacks pay out top-first with non-increasing values, one pop
//! per card sold; an exhausted stack pays nothing. Set-bonus stacks pay one
//! token for selling a group of 3, 4, or 5 in a single action, and their
//! order is shuffled at setup so the exact bonus is hidden information of
//! the economy, not of either player.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Good;
use super::rng::GameRng;

/// Sale-group sizes that pay a set bonus.
pub(crate) const SET_BONUS_SIZES: [usize; 3] = [3, 4, 5];

/// An ordered stack of payout tokens, popped top-first.
///
/// Stored with the top at the end of the vec, matching the draw-pile
/// convention.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStack {
    values: Vec<i64>,
}

impl TokenStack {
    /// Build from values listed top-first (the order they will pop).
    #[must_use]
    pub fn from_top_down(values: &[i64]) -> Self {
        Self {
            values: values.iter().rev().copied().collect(),
        }
    }

    /// Pop the top token, or `None` once exhausted.
    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    /// Remaining token count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True once every token has been popped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the top `n` tokens, or of all remaining tokens if fewer.
    ///
    /// This is what selling `n` cards of the matching good would pay,
    /// set bonus excluded.
    #[must_use]
    pub fn top_sum(&self, n: usize) -> i64 {
        self.values.iter().rev().take(n).sum()
    }

    /// Remaining values, top-first.
    pub fn iter_top_down(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().rev().copied()
    }
}

/// Fresh per-good payout stacks.
pub(crate) fn goods_token_stacks() -> FxHashMap<Good, TokenStack> {
    let mut stacks = FxHashMap::default();
    stacks.insert(Good::Ruby, TokenStack::from_top_down(&[7, 7, 5, 5, 5]));
    stacks.insert(Good::Gold, TokenStack::from_top_down(&[6, 6, 5, 5, 5]));
    stacks.insert(Good::Silver, TokenStack::from_top_down(&[5, 5, 5, 5, 5]));
    stacks.insert(Good::Silk, TokenStack::from_top_down(&[5, 3, 3, 2, 2, 1, 1]));
    stacks.insert(Good::Spice, TokenStack::from_top_down(&[5, 3, 3, 2, 2, 1, 1]));
    stacks.insert(
        Good::Leather,
        TokenStack::from_top_down(&[4, 3, 2, 1, 1, 1, 1, 1, 1]),
    );
    stacks
}

/// Fresh set-bonus stacks keyed by sale-group size, shuffled with the
/// injected RNG.
pub(crate) fn set_bonus_stacks(rng: &mut GameRng) -> FxHashMap<usize, TokenStack> {
    let mut stacks = FxHashMap::default();
    for (size, values) in [
        (3usize, vec![1i64, 1, 2, 2, 2, 3, 3]),
        (4, vec![4, 4, 5, 5, 6, 6]),
        (5, vec![8, 8, 9, 10, 10]),
    ] {
        let mut shuffled = values;
        rng.shuffle(&mut shuffled);
        stacks.insert(size, TokenStack::from_top_down(&shuffled));
    }
    stacks
}

/// A fresh shuffled draw pile, top at the end of the vec.
pub(crate) fn starting_deck(rng: &mut GameRng) -> Vec<Good> {
    let mut deck = Vec::with_capacity(52);
    for good in Good::ALL {
        deck.extend(std::iter::repeat(good).take(good.deck_count()));
    }
    rng.shuffle(&mut deck);
    deck
}
