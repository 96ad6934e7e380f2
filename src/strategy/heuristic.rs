//! Rule-list strategies: an ordered sequence of independent heuristics
//! composed with a random fallback, first match wins.
//!
//! Each rule is a pure closure from a view to an optional candidate
//! action. A rule that fires with an illegal candidate is simply skipped,
//! so rules can stay simple and optimistic.

use crate::core::{Action, GameRng, Good, PlayerView};

use super::random::random_action;
use super::Strategy;

/// One independent heuristic: a candidate action, or nothing.
pub type HeuristicRule = Box<dyn Fn(&PlayerView) -> Option<Action> + Send>;

/// First-match-wins composition of heuristic rules over a random fallback.
pub struct RuleStrategy {
    rules: Vec<HeuristicRule>,
    rng: GameRng,
}

impl RuleStrategy {
    /// Compose rules in priority order; `seed` drives the fallback.
    #[must_use]
    pub fn new(rules: Vec<HeuristicRule>, seed: u64) -> Self {
        Self {
            rules,
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RuleStrategy {
    fn propose(&mut self, view: &PlayerView, is_legal: &dyn Fn(&Action) -> bool) -> Action {
        for rule in &self.rules {
            if let Some(action) = rule(view) {
                if is_legal(&action) {
                    return action;
                }
            }
        }
        loop {
            let action = random_action(view, &mut self.rng);
            if is_legal(&action) {
                return action;
            }
        }
    }
}

/// Expected points for selling `count` cards of `good` right now: the top
/// of the payout stack plus a flat estimate of the set bonus.
#[must_use]
pub fn sale_value(view: &PlayerView, good: Good, count: usize) -> i64 {
    let tokens = view
        .tokens(good)
        .map(|stack| stack.top_sum(count))
        .unwrap_or(0);
    let bonus_estimate = match count {
        3 => 2,
        4 => 5,
        5 => 9,
        _ => 0,
    };
    tokens + bonus_estimate
}

/// Average per-card worth of picking up one more `good` from the market,
/// assuming the whole holding is sold afterwards.
#[must_use]
pub fn market_card_value(view: &PlayerView, good: Good) -> f64 {
    let count = view.hand().iter().filter(|&&c| c == good).count() + 1;
    sale_value(view, good, count) as f64 / count as f64
}

/// The hand good whose full sale is worth the most right now.
fn best_sale(view: &PlayerView) -> Option<(Good, usize, i64)> {
    Good::GOODS
        .into_iter()
        .filter_map(|good| {
            let held = view.hand().iter().filter(|&&c| c == good).count();
            if held == 0 {
                return None;
            }
            Some((good, held, sale_value(view, good, held)))
        })
        .max_by_key(|&(_, _, value)| value)
}

/// Sell the entire best holding if it is worth at least `min` points.
#[must_use]
pub fn sell_best_worth_at_least(min: i64) -> HeuristicRule {
    Box::new(move |view| {
        let (good, held, value) = best_sale(view)?;
        (value >= min).then(|| Action::sell_group(good, held))
    })
}

/// Take the market good with the highest per-card worth, if any beats
/// `min`.
#[must_use]
pub fn take_single_worth_more_than(min: f64) -> HeuristicRule {
    Box::new(move |view| {
        view.market()
            .iter()
            .filter(|&&good| good != Good::Camel)
            .map(|&good| (good, market_card_value(view, good)))
            .filter(|&(_, value)| value > min)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(good, _)| Action::take_single(good))
    })
}

/// Take the camels whenever the market holds at least `min` of them.
#[must_use]
pub fn take_camels_if_at_least(min: usize) -> HeuristicRule {
    Box::new(move |view| {
        let camels = view.market().iter().filter(|&&c| c == Good::Camel).count();
        (camels >= min).then(Action::take_camels)
    })
}

/// A straightforward reference composition: cash in good sales, pick up
/// valuable goods, grab camel-heavy markets, otherwise improvise.
#[must_use]
pub fn basic_strategy(seed: u64) -> RuleStrategy {
    RuleStrategy::new(
        vec![
            sell_best_worth_at_least(4),
            take_single_worth_more_than(2.0),
            take_camels_if_at_least(3),
        ],
        seed,
    )
}
