//! The legality predicate for proposed actions.
//!
//! `is_legal` is pure: it inspects the current state and an arbitrary
//! (possibly hostile) action and answers yes or no. An illegal proposal is
//! not an error - drivers simply ask the strategy again. The predicate
//! accepts exactly the language the enumerator produces.

use crate::core::card::{count_of, is_sub_bag, Good};
use crate::core::state::{GameState, MAX_HAND_SIZE};
use crate::core::{Action, Player};

/// Check a proposed action for the active player. Pure, no side effects.
#[must_use]
pub fn is_legal(state: &GameState, action: &Action) -> bool {
    let player = state.player(state.active_seat());
    match action {
        Action::TakeCamels => state.market().contains(&Good::Camel),
        Action::TakeSingle(good) => {
            *good != Good::Camel
                && count_of(state.market(), *good) > 0
                && player.hand.len() < MAX_HAND_SIZE
        }
        Action::Sell(cards) => can_sell(cards, &player.hand),
        Action::Swap { put, take } => legal_swap(put, take, player, state.market()),
    }
}

/// Whether `cards` can be sold out of `hand`: a non-empty group of one
/// non-camel type, covered by the hand, meeting the type's minimum size.
#[must_use]
pub fn can_sell(cards: &[Good], hand: &[Good]) -> bool {
    let Some(&first) = cards.first() else {
        return false;
    };
    if first == Good::Camel || cards.iter().any(|&c| c != first) {
        return false;
    }
    count_of(hand, first) >= cards.len() && cards.len() >= first.min_sale_size()
}

fn legal_swap(put: &[Good], take: &[Good], player: &Player, market: &[Good]) -> bool {
    if put.len() != take.len() || put.len() < 2 {
        return false;
    }
    if take.contains(&Good::Camel) {
        return false;
    }

    let camels_placed = count_of(put, Good::Camel);
    if camels_placed > player.herd as usize {
        return false;
    }
    // Placed camels join the hand; the goods side of `put` leaves it.
    if player.hand.len() + camels_placed > MAX_HAND_SIZE {
        return false;
    }

    // No self-trade: the same good may not appear on both sides. Camels
    // never appear in `take`, so this reduces to the goods in `put`.
    if put.iter().any(|p| take.contains(p)) {
        return false;
    }

    // Both sides must actually be available.
    let goods_put: Vec<Good> = put.iter().copied().filter(|&c| c != Good::Camel).collect();
    is_sub_bag(&goods_put, &player.hand) && is_sub_bag(take, market)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;

    /// A state with the given position for the active seat. The opponent
    /// keeps whatever the seed dealt; it is irrelevant to legality.
    fn fixture(hand: &[Good], herd: u32, market: &[Good]) -> GameState {
        let mut state = GameState::new(0);
        state.players[Seat::A].hand = hand.to_vec();
        state.players[Seat::A].herd = herd;
        state.market = market.to_vec();
        state
    }

    const MARKET: [Good; 5] = [
        Good::Camel,
        Good::Ruby,
        Good::Spice,
        Good::Spice,
        Good::Leather,
    ];

    #[test]
    fn test_take_camels_requires_camel_in_market() {
        let with = fixture(&[], 0, &MARKET);
        assert!(is_legal(&with, &Action::take_camels()));

        let without = fixture(&[], 0, &[Good::Ruby; 5]);
        assert!(!is_legal(&without, &Action::take_camels()));
    }

    #[test]
    fn test_take_single() {
        let state = fixture(&[Good::Silk], 0, &MARKET);
        assert!(is_legal(&state, &Action::take_single(Good::Ruby)));
        // Not in the market.
        assert!(!is_legal(&state, &Action::take_single(Good::Gold)));
        // Camels are taken with TakeCamels, never singly.
        assert!(!is_legal(&state, &Action::take_single(Good::Camel)));
    }

    #[test]
    fn test_take_single_blocked_by_full_hand() {
        let state = fixture(&[Good::Silk; 7], 0, &MARKET);
        assert!(!is_legal(&state, &Action::take_single(Good::Ruby)));
    }

    #[test]
    fn test_sell_common_goods_allow_singles() {
        let state = fixture(&[Good::Silk, Good::Leather], 0, &MARKET);
        assert!(is_legal(&state, &Action::sell_group(Good::Silk, 1)));
        assert!(is_legal(&state, &Action::sell_group(Good::Leather, 1)));
    }

    #[test]
    fn test_sell_precious_goods_require_pairs() {
        let one = fixture(&[Good::Ruby], 0, &MARKET);
        assert!(!is_legal(&one, &Action::sell_group(Good::Ruby, 1)));

        let two = fixture(&[Good::Ruby, Good::Ruby], 0, &MARKET);
        assert!(is_legal(&two, &Action::sell_group(Good::Ruby, 2)));
    }

    #[test]
    fn test_sell_rejects_bad_groups() {
        let state = fixture(&[Good::Silk, Good::Leather], 2, &MARKET);
        // Empty group.
        assert!(!is_legal(&state, &Action::sell([])));
        // Mixed types.
        assert!(!is_legal(&state, &Action::sell([Good::Silk, Good::Leather])));
        // More than held.
        assert!(!is_legal(&state, &Action::sell_group(Good::Silk, 2)));
        // Camels are not goods.
        assert!(!is_legal(&state, &Action::sell_group(Good::Camel, 2)));
    }

    #[test]
    fn test_swap_basic() {
        let state = fixture(&[Good::Gold, Good::Silk], 1, &MARKET);
        assert!(is_legal(
            &state,
            &Action::swap([Good::Gold, Good::Silk], [Good::Ruby, Good::Spice])
        ));
    }

    #[test]
    fn test_swap_length_rules() {
        let state = fixture(&[Good::Gold, Good::Silk], 1, &MARKET);
        // Mismatched lengths.
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Gold], [Good::Ruby, Good::Spice])
        ));
        // Single-card swaps are not allowed.
        assert!(!is_legal(&state, &Action::swap([Good::Gold], [Good::Ruby])));
    }

    #[test]
    fn test_swap_cannot_take_camels() {
        let state = fixture(&[Good::Gold, Good::Silk], 0, &MARKET);
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Gold, Good::Silk], [Good::Camel, Good::Ruby])
        ));
    }

    #[test]
    fn test_swap_camels_limited_by_herd() {
        let state = fixture(&[Good::Gold], 1, &MARKET);
        assert!(is_legal(
            &state,
            &Action::swap([Good::Gold, Good::Camel], [Good::Ruby, Good::Spice])
        ));
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Camel, Good::Camel], [Good::Ruby, Good::Spice])
        ));
    }

    #[test]
    fn test_swap_all_camels_is_legal() {
        let state = fixture(&[], 3, &MARKET);
        assert!(is_legal(
            &state,
            &Action::swap(
                [Good::Camel, Good::Camel, Good::Camel],
                [Good::Ruby, Good::Spice, Good::Leather]
            )
        ));
    }

    #[test]
    fn test_swap_no_self_trade() {
        let state = fixture(&[Good::Spice, Good::Gold], 0, &MARKET);
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Spice, Good::Gold], [Good::Spice, Good::Ruby])
        ));
    }

    #[test]
    fn test_swap_capacity_counts_placed_camels() {
        // 6 in hand + 2 camels placed would leave 8 after taking.
        let state = fixture(&[Good::Silk; 6], 5, &MARKET);
        assert!(!is_legal(
            &state,
            &Action::swap(
                [Good::Camel, Good::Camel, Good::Silk],
                [Good::Ruby, Good::Spice, Good::Leather]
            )
        ));
        // One camel keeps the hand at 7.
        assert!(is_legal(
            &state,
            &Action::swap([Good::Camel, Good::Silk], [Good::Ruby, Good::Spice])
        ));
    }

    #[test]
    fn test_swap_requires_cards_to_exist() {
        let state = fixture(&[Good::Gold, Good::Silk], 0, &MARKET);
        // Gold is not in the market.
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Gold, Good::Silk], [Good::Gold, Good::Ruby])
        ));
        // Two rubies are not in the market.
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Gold, Good::Silk], [Good::Ruby, Good::Ruby])
        ));
        // Ruby is not in the hand.
        assert!(!is_legal(
            &state,
            &Action::swap([Good::Ruby, Good::Silk], [Good::Spice, Good::Leather])
        ));
    }

    #[test]
    fn test_legality_is_pure() {
        let state = fixture(&[Good::Gold, Good::Silk], 1, &MARKET);
        let before = state.clone();
        let _ = is_legal(&state, &Action::take_camels());
        let _ = is_legal(&state, &Action::sell_group(Good::Silk, 1));
        assert_eq!(state.market(), before.market());
        assert_eq!(state.player(Seat::A), before.player(Seat::A));
    }
}
