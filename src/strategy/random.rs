//! Random reference strategies.

use crate::core::{Action, CardList, GameRng, Good, PlayerView};

use super::Strategy;

/// Generate one unvalidated random action shape from a view.
///
/// Most outputs are illegal; callers rejection-sample against the
/// legality callback.
pub fn random_action(view: &PlayerView, rng: &mut GameRng) -> Action {
    match rng.gen_range_usize(0..4) {
        0 => Action::take_camels(),
        1 => {
            let cards: CardList = view
                .hand()
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            Action::Sell(cards)
        }
        2 => match rng.choose(view.market()).copied() {
            Some(good) => Action::take_single(good),
            None => Action::take_camels(),
        },
        _ => {
            let put: CardList = view
                .hand()
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            let take: CardList = view
                .market()
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            Action::Swap { put, take }
        }
    }
}

/// Rejection-sampling random player: keeps generating shapes until one is
/// legal. Guaranteed to terminate while any action is legal, which holds
/// for every non-terminal position.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create with a seed of its own, independent of the game seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn propose(&mut self, view: &PlayerView, is_legal: &dyn Fn(&Action) -> bool) -> Action {
        loop {
            let action = random_action(view, &mut self.rng);
            if is_legal(&action) {
                return action;
            }
        }
    }
}

/// Uniform choice over the enumerated legal action set.
#[derive(Clone, Debug)]
pub struct UniformStrategy {
    rng: GameRng,
}

impl UniformStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for UniformStrategy {
    fn propose(&mut self, view: &PlayerView, _is_legal: &dyn Fn(&Action) -> bool) -> Action {
        let actions = view.legal_actions();
        match self.rng.choose(&actions) {
            Some(action) => action.clone(),
            // Unreachable from a non-terminal position; TakeCamels is as
            // good a throwaway as any for the re-request loop.
            None => Action::take_camels(),
        }
    }
}
