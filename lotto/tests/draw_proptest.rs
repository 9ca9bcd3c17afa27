/// Property-based tests for draws, scoring, and selection limits using proptest
///
/// These tests verify the engine's invariants across randomly generated
/// pools, seeds, selections, and toggle sequences.
use lotto::{
    GameConfig, GameSession, Pool, PoolKind, PrizeTable, SelectionTracker,
    functional::match_count,
    game::draw::draw_numbers,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::BTreeSet;

// Strategy to generate a valid pool (limit never above total)
fn pool_strategy() -> impl Strategy<Value = Pool> {
    (1u8..=60).prop_flat_map(|total| (Just(total), 1..=usize::from(total)))
        .prop_map(|(total, limit)| Pool::new(total, limit))
}

// Strategy to generate a set of numbers drawn from 1..=37
fn number_set_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::btree_set(1u8..=37, 0..=10).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn test_draw_has_limit_distinct_numbers_in_range(pool in pool_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let drawn = draw_numbers(&mut rng, &pool);

        prop_assert_eq!(drawn.len(), pool.limit);
        let unique: BTreeSet<_> = drawn.iter().copied().collect();
        prop_assert_eq!(unique.len(), drawn.len(), "draw must not repeat a number");
        prop_assert!(drawn.iter().all(|&n| n >= 1 && n <= pool.total));
        prop_assert!(drawn.windows(2).all(|w| w[0] < w[1]), "draw must be sorted");
    }

    #[test]
    fn test_match_count_symmetric(a in number_set_strategy(), b in number_set_strategy()) {
        prop_assert_eq!(match_count(&a, &b), match_count(&b, &a));
    }

    #[test]
    fn test_match_count_bounded(a in number_set_strategy(), b in number_set_strategy()) {
        let count = match_count(&a, &b);
        prop_assert!(count <= a.len().min(b.len()));
    }

    #[test]
    fn test_toggle_sequence_never_exceeds_limit(
        toggles in prop::collection::vec((any::<bool>(), 0u8..=40), 0..200)
    ) {
        let mut tracker = SelectionTracker::new(Pool::new(37, 6), Pool::new(7, 1));
        for (strong, number) in toggles {
            let kind = if strong { PoolKind::Strong } else { PoolKind::Regular };
            let _ = tracker.toggle(kind, number);
            prop_assert!(tracker.count(PoolKind::Regular) <= 6);
            prop_assert!(tracker.count(PoolKind::Strong) <= 1);
        }
    }

    #[test]
    fn test_unlisted_pairs_never_pay(regular in 0usize..=6, strong in 0usize..=1) {
        let table = PrizeTable::default();
        let listed = matches!((regular, strong), (6, 1) | (6, 0) | (4, 1));
        prop_assert_eq!(table.prize_for(regular, strong).is_some(), listed);
    }

    #[test]
    fn test_reset_always_restores_initial_balance(rounds in 0usize..6, picks in number_set_strategy()) {
        let mut session = GameSession::configure(GameConfig::default()).unwrap();
        for _ in 0..rounds {
            let _ = session.submit_selection(&[1, 2, 3, 4, 5, 6], &[1]);
        }
        for number in picks {
            let _ = session.toggle_selection(PoolKind::Regular, number);
        }

        prop_assert_eq!(session.reset_session(), 1000);
        prop_assert!(session.current_selection(PoolKind::Regular).is_empty());
        prop_assert!(session.current_selection(PoolKind::Strong).is_empty());
    }
}
