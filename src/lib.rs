//! # caravan
//!
//! An authoritative rule engine for a two-player goods-trading card game:
//! players take goods from a shared five-card market, herd camels, and sell
//! matching sets against diminishing per-good payout stacks and set bonuses.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: `GameState` owns everything. Per-player
//!    views are pure projections computed on demand, never mutable copies
//!    kept in sync by hand.
//!
//! 2. **Partial Information**: a `PlayerView` exposes the opponent's hand
//!    only as a card count. Concrete identities never cross the boundary.
//!
//! 3. **Deterministic**: every shuffle and every fallback random move runs
//!    through a seedable `GameRng`. One seed reproduces one full game.
//!
//! 4. **Narrow Collaborator Contract**: bots implement `Strategy` and see
//!    only a view plus a legality callback. The engine re-validates every
//!    proposal; illegal ones are simply re-requested.
//!
//! ## Modules
//!
//! - `core`: cards, seats, economy stacks, RNG, actions, state, views
//! - `rules`: legality validator, legal-move enumerator, executor
//! - `strategy`: the `Strategy` contract and reference implementations
//! - `runner`: driver loop playing one game to completion

pub mod core;
pub mod rules;
pub mod runner;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardList, GameRng, GameState, GameStatus, Good, Player, PlayerView,
    Seat, SeatMap, TokenStack, HERD_BONUS, MARKET_SIZE, MAX_HAND_SIZE,
};

pub use crate::rules::{
    all_legal_actions, award_herd_bonus, can_sell, execute, goods_subsets, is_legal, swap_pairs,
};

pub use crate::runner::{run_game, GameOutcome};

pub use crate::strategy::{basic_strategy, RandomStrategy, RuleStrategy, Strategy, UniformStrategy};
