//! Card types and multiset helpers.
//!
//! Cards are identity-only values: there are six tradeable goods plus the
//! camel. Camels are herded, never held in a hand, and never sold.

use serde::{Deserialize, Serialize};

/// A card type. Equality and hashing only - goods have no inherent order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Good {
    Ruby,
    Gold,
    Silver,
    Silk,
    Spice,
    Leather,
    Camel,
}

impl Good {
    /// The six tradeable goods, camel excluded.
    pub const GOODS: [Good; 6] = [
        Good::Ruby,
        Good::Gold,
        Good::Silver,
        Good::Silk,
        Good::Spice,
        Good::Leather,
    ];

    /// Every card type, camel included.
    pub const ALL: [Good; 7] = [
        Good::Ruby,
        Good::Gold,
        Good::Silver,
        Good::Silk,
        Good::Spice,
        Good::Leather,
        Good::Camel,
    ];

    /// Number of copies of this card in a fresh draw pile.
    ///
    /// Three additional camels are seeded directly into the opening market
    /// and are not part of the pile.
    #[must_use]
    pub const fn deck_count(self) -> usize {
        match self {
            Good::Ruby | Good::Gold | Good::Silver => 6,
            Good::Silk | Good::Spice => 8,
            Good::Leather => 10,
            Good::Camel => 8,
        }
    }

    /// Smallest group this good may be sold in.
    ///
    /// The three precious goods require pairs; camels can never be sold, so
    /// no group is large enough.
    #[must_use]
    pub const fn min_sale_size(self) -> usize {
        match self {
            Good::Ruby | Good::Gold | Good::Silver => 2,
            Good::Silk | Good::Spice | Good::Leather => 1,
            Good::Camel => usize::MAX,
        }
    }

    /// Dense index used for count-vector bag keys.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Good::Ruby => 0,
            Good::Gold => 1,
            Good::Silver => 2,
            Good::Silk => 3,
            Good::Spice => 4,
            Good::Leather => 5,
            Good::Camel => 6,
        }
    }
}

/// Count occurrences of a card in an unordered multiset.
pub(crate) fn count_of(cards: &[Good], good: Good) -> usize {
    cards.iter().filter(|&&c| c == good).count()
}

/// Remove one occurrence of a card. Returns false if absent.
pub(crate) fn remove_one(cards: &mut Vec<Good>, good: Good) -> bool {
    if let Some(pos) = cards.iter().position(|&c| c == good) {
        cards.remove(pos);
        true
    } else {
        false
    }
}

/// Bag representation: per-type counts, indexed by `Good::index`.
pub(crate) fn bag_key(cards: &[Good]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &card in cards {
        counts[card.index()] += 1;
    }
    counts
}

/// True if `sub` is contained in `sup` as a multiset.
pub(crate) fn is_sub_bag(sub: &[Good], sup: &[Good]) -> bool {
    let sub_counts = bag_key(sub);
    let sup_counts = bag_key(sup);
    sub_counts.iter().zip(sup_counts.iter()).all(|(a, b)| a <= b)
}
