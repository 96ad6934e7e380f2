//! The closed set of moves a player can make.
//!
//! Actions are immutable value objects built once and handed to the
//! validator and executor. Card lists ride in a `SmallVec` sized for the
//! seven-card hand limit, so typical actions never touch the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Good;
use super::player::Seat;

/// Inline list of cards carried by an action.
pub type CardList = SmallVec<[Good; 7]>;

/// A complete move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take every camel in the market into the herd.
    TakeCamels,
    /// Take one non-camel good from the market into the hand.
    TakeSingle(Good),
    /// Sell a non-empty group of one good type from the hand.
    Sell(CardList),
    /// Exchange equal-sized card sets with the market. `put` may include
    /// herd camels; `take` never contains camels.
    Swap { put: CardList, take: CardList },
}

impl Action {
    /// The take-all-camels move.
    #[must_use]
    pub fn take_camels() -> Self {
        Action::TakeCamels
    }

    /// Take one good from the market.
    #[must_use]
    pub fn take_single(good: Good) -> Self {
        Action::TakeSingle(good)
    }

    /// Sell the given cards.
    pub fn sell(cards: impl IntoIterator<Item = Good>) -> Self {
        Action::Sell(cards.into_iter().collect())
    }

    /// Sell `count` copies of one good.
    #[must_use]
    pub fn sell_group(good: Good, count: usize) -> Self {
        Action::Sell(std::iter::repeat(good).take(count).collect())
    }

    /// Swap `put` (hand cards and herd camels) for `take` (market cards).
    pub fn swap(
        put: impl IntoIterator<Item = Good>,
        take: impl IntoIterator<Item = Good>,
    ) -> Self {
        Action::Swap {
            put: put.into_iter().collect(),
            take: take.into_iter().collect(),
        }
    }
}

/// A recorded action with the seat that took it.
///
/// The state keeps an append-only history of these for replay and
/// debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: Seat,
    /// The action taken.
    pub action: Action,
}
