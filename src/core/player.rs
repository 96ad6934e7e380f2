//! Seats and per-seat data for a strictly two-player game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::Good;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }

    /// Both seats, in turn order.
    #[must_use]
    pub const fn both() -> [Seat; 2] {
        [Seat::A, Seat::B]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "Seat A"),
            Seat::B => write!(f, "Seat B"),
        }
    }
}

/// Per-seat storage with O(1) access by `Seat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::A), factory(Seat::B)],
        }
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

/// One player's owned material: hand, herd, and cumulative score.
///
/// Camels never enter the hand - they move between the market and the herd.
/// The hand holds at most `MAX_HAND_SIZE` cards at the end of every
/// completed action. Only the executor mutates a `Player`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unordered multiset of goods.
    pub hand: Vec<Good>,
    /// Owned camel count.
    pub herd: u32,
    /// Cumulative score.
    pub score: i64,
}

impl Player {
    /// A player with an empty hand, empty herd, and zero score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of one good in hand.
    #[must_use]
    pub fn count(&self, good: Good) -> usize {
        super::card::count_of(&self.hand, good)
    }
}
