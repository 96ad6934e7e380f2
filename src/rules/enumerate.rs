//! Combinatorial enumeration of every legal action from a position.
//!
//! Strategies call this instead of guessing: everything returned satisfies
//! the validator, and the validator accepts nothing this module could not
//! have produced (up to card-list ordering, since hands and markets are
//! multisets).
//!
//! The hard case is swaps. Subset universes are generated by index-based
//! inclusion/exclusion recursion, with camels excluded from membership and
//! structurally identical subsets collapsed through a per-type count key,
//! so `[Gold, Silk]` and `[Silk, Gold]` appear once.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::card::{bag_key, count_of, Good};
use crate::core::state::MAX_HAND_SIZE;
use crate::core::{Action, CardList};

/// Minimum combined size of a swap.
const MIN_SWAP_SIZE: usize = 2;

/// Every bag-distinct camel-free subset of `cards`, the empty subset
/// included.
#[must_use]
pub fn goods_subsets(cards: &[Good]) -> Vec<CardList> {
    let mut seen: FxHashSet<[u8; 7]> = FxHashSet::default();
    let mut out = Vec::new();
    let mut current = CardList::new();
    collect_subsets(cards, 0, &mut current, &mut seen, &mut out);
    out
}

fn collect_subsets(
    cards: &[Good],
    index: usize,
    current: &mut CardList,
    seen: &mut FxHashSet<[u8; 7]>,
    out: &mut Vec<CardList>,
) {
    if index == cards.len() {
        if seen.insert(bag_key(current)) {
            out.push(current.clone());
        }
        return;
    }

    collect_subsets(cards, index + 1, current, seen, out);

    // Camels are never subset members.
    if cards[index] != Good::Camel {
        current.push(cards[index]);
        collect_subsets(cards, index + 1, current, seen, out);
        current.pop();
    }
}

/// Every legal swap pairing from a position.
///
/// Each pair is (cards leaving the hand/herd, cards taken from the
/// market). Hand-side subsets are optionally topped up with herd camels,
/// bounded by the herd, by the market's non-camel supply, and by the hand
/// capacity the camels will consume.
#[must_use]
pub fn swap_pairs(hand: &[Good], herd: u32, market: &[Good]) -> Vec<(CardList, CardList)> {
    let market_goods = market.iter().filter(|&&c| c != Good::Camel).count();

    let mut takes_by_size: FxHashMap<usize, Vec<CardList>> = FxHashMap::default();
    for subset in goods_subsets(market) {
        if subset.len() >= MIN_SWAP_SIZE {
            takes_by_size.entry(subset.len()).or_default().push(subset);
        }
    }

    let hand_capacity = MAX_HAND_SIZE.saturating_sub(hand.len());
    let mut pairs = Vec::new();

    for subset in goods_subsets(hand) {
        if subset.len() > market_goods {
            continue;
        }
        let max_camels = (herd as usize)
            .min(market_goods - subset.len())
            .min(hand_capacity);

        for camels in 0..=max_camels {
            let size = subset.len() + camels;
            if size < MIN_SWAP_SIZE {
                continue;
            }
            let Some(takes) = takes_by_size.get(&size) else {
                continue;
            };

            for take in takes {
                if subset.iter().any(|g| take.contains(g)) {
                    continue;
                }
                let mut put = subset.clone();
                put.extend(std::iter::repeat(Good::Camel).take(camels));
                pairs.push((put, take.clone()));
            }
        }
    }

    pairs
}

/// Every legal action from a position.
///
/// Iteration over `Good::GOODS` keeps the output order deterministic.
#[must_use]
pub fn all_legal_actions(hand: &[Good], herd: u32, market: &[Good]) -> Vec<Action> {
    let mut actions = Vec::new();

    if market.contains(&Good::Camel) {
        actions.push(Action::take_camels());
    }

    if hand.len() < MAX_HAND_SIZE {
        for good in Good::GOODS {
            if count_of(market, good) > 0 {
                actions.push(Action::take_single(good));
            }
        }
    }

    for good in Good::GOODS {
        let held = count_of(hand, good);
        for size in good.min_sale_size()..=held {
            actions.push(Action::sell_group(good, size));
        }
    }

    for (put, take) in swap_pairs(hand, herd, market) {
        actions.push(Action::Swap { put, take });
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_bag(universe: &[CardList], bag: &[Good]) -> bool {
        universe.iter().any(|s| bag_key(s) == bag_key(bag))
    }

    #[test]
    fn test_goods_subsets_universe() {
        let hand = [Good::Gold, Good::Gold, Good::Silver, Good::Camel, Good::Leather];
        let subsets = goods_subsets(&hand);

        assert_eq!(subsets.len(), 12);
        assert!(contains_bag(&subsets, &[]));
        assert!(contains_bag(&subsets, &[Good::Gold]));
        assert!(contains_bag(&subsets, &[Good::Gold, Good::Gold]));
        assert!(contains_bag(&subsets, &[Good::Gold, Good::Silver, Good::Leather]));
        assert!(contains_bag(
            &subsets,
            &[Good::Gold, Good::Gold, Good::Silver, Good::Leather]
        ));
        assert!(subsets.iter().all(|s| !s.contains(&Good::Camel)));
    }

    #[test]
    fn test_goods_subsets_deduplicates_bags() {
        // Two identical cards: positions differ, bags do not.
        let subsets = goods_subsets(&[Good::Silk, Good::Silk]);
        assert_eq!(subsets.len(), 3); // {}, {Silk}, {Silk, Silk}
    }

    #[test]
    fn test_goods_subsets_all_camels() {
        let subsets = goods_subsets(&[Good::Camel, Good::Camel]);
        assert_eq!(subsets.len(), 1);
        assert!(subsets[0].is_empty());
    }

    #[test]
    fn test_swap_pairs_simple_case() {
        let hand = [Good::Ruby, Good::Gold];
        let market = [Good::Silver, Good::Spice, Good::Silk, Good::Leather, Good::Camel];

        let pairs = swap_pairs(&hand, 0, &market);

        // {Ruby, Gold} against every 2-subset of the four market goods.
        assert_eq!(pairs.len(), 6);
        for (put, take) in &pairs {
            assert_eq!(bag_key(put), bag_key(&hand));
            assert_eq!(take.len(), 2);
            assert!(!take.contains(&Good::Camel));
        }
        let expected_takes = [
            [Good::Silver, Good::Spice],
            [Good::Silver, Good::Silk],
            [Good::Silver, Good::Leather],
            [Good::Spice, Good::Silk],
            [Good::Spice, Good::Leather],
            [Good::Silk, Good::Leather],
        ];
        for expected in expected_takes {
            assert!(
                pairs.iter().any(|(_, t)| bag_key(t) == bag_key(&expected)),
                "missing take {expected:?}"
            );
        }
    }

    #[test]
    fn test_swap_pairs_full_hand_blocks_camels() {
        let hand = [Good::Leather; 7];
        let market = [Good::Spice; 5];

        // An enormous herd is irrelevant: the hand has no room for camels.
        let pairs = swap_pairs(&hand, 420, &market);

        assert_eq!(pairs.len(), 4);
        for size in 2..=5 {
            assert!(pairs.iter().any(|(put, take)| {
                put.len() == size
                    && take.len() == size
                    && put.iter().all(|&c| c == Good::Leather)
                    && take.iter().all(|&c| c == Good::Spice)
            }));
        }
    }

    #[test]
    fn test_swap_pairs_camel_only_swaps() {
        let market = [Good::Silver, Good::Spice, Good::Silk, Good::Leather, Good::Camel];
        let pairs = swap_pairs(&[], 2, &market);

        // Only pure-camel puts are possible, and only at size 2.
        assert_eq!(pairs.len(), 6);
        for (put, take) in &pairs {
            assert_eq!(put.as_slice(), &[Good::Camel, Good::Camel]);
            assert_eq!(take.len(), 2);
        }
    }

    #[test]
    fn test_swap_pairs_excludes_overlapping_types() {
        let hand = [Good::Spice, Good::Gold];
        let market = [Good::Spice, Good::Silk, Good::Leather, Good::Ruby, Good::Camel];

        for (put, take) in swap_pairs(&hand, 0, &market) {
            for card in &put {
                assert!(!take.contains(card), "self-trade in {put:?} -> {take:?}");
            }
        }
    }

    #[test]
    fn test_take_single_suppressed_on_full_hand() {
        let hand = [Good::Silk; 7];
        let market = [Good::Ruby, Good::Gold, Good::Spice, Good::Camel, Good::Camel];
        let actions = all_legal_actions(&hand, 0, &market);

        assert!(actions.contains(&Action::take_camels()));
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::TakeSingle(_))));
    }

    #[test]
    fn test_sell_sizes_respect_type_minimums() {
        let hand = [Good::Ruby, Good::Ruby, Good::Ruby, Good::Leather];
        let actions = all_legal_actions(&hand, 0, &[Good::Camel; 5]);

        assert!(!actions.contains(&Action::sell_group(Good::Ruby, 1)));
        assert!(actions.contains(&Action::sell_group(Good::Ruby, 2)));
        assert!(actions.contains(&Action::sell_group(Good::Ruby, 3)));
        assert!(actions.contains(&Action::sell_group(Good::Leather, 1)));
        assert!(!actions.contains(&Action::sell_group(Good::Leather, 2)));
    }

    #[test]
    fn test_distinct_market_goods_taken_once() {
        let hand = [Good::Silk];
        let market = [Good::Spice, Good::Spice, Good::Spice, Good::Ruby, Good::Camel];
        let actions = all_legal_actions(&hand, 0, &market);

        let takes: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::TakeSingle(_)))
            .collect();
        assert_eq!(takes.len(), 2); // Spice once, Ruby once.
    }

    #[test]
    fn test_no_actions_reference_absent_cards() {
        let hand = [Good::Gold, Good::Gold, Good::Silk];
        let market = [Good::Ruby, Good::Ruby, Good::Leather, Good::Camel, Good::Camel];

        for action in all_legal_actions(&hand, 1, &market) {
            match action {
                Action::TakeSingle(g) => assert!(market.contains(&g)),
                Action::Sell(cards) => assert!(crate::core::card::is_sub_bag(&cards, &hand)),
                Action::Swap { take, .. } => {
                    assert!(crate::core::card::is_sub_bag(&take, &market));
                }
                Action::TakeCamels => {}
            }
        }
    }
}
