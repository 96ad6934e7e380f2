//! The action-proposal contract consumed by the engine, plus reference
//! strategies.
//!
//! A strategy sees only its `PlayerView` and a legality callback. The
//! driver re-validates every proposal and asks again on failure, without a
//! retry cap, so every strategy must eventually produce a legal action -
//! the rejection-sampling random generator here is the canonical way to
//! guarantee that.

pub mod heuristic;
pub mod random;

pub use heuristic::{
    basic_strategy, market_card_value, sale_value, sell_best_worth_at_least,
    take_camels_if_at_least, take_single_worth_more_than, HeuristicRule, RuleStrategy,
};
pub use random::{random_action, RandomStrategy, UniformStrategy};

use crate::core::{Action, PlayerView};

/// An external decision-maker for one seat.
pub trait Strategy {
    /// Propose an action for the position in `view`.
    ///
    /// `is_legal` checks a candidate against the authoritative state. The
    /// engine re-validates the return value and calls again until a legal
    /// action comes back.
    fn propose(&mut self, view: &PlayerView, is_legal: &dyn Fn(&Action) -> bool) -> Action;
}
