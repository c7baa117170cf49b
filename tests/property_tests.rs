use fastrand::Rng;
use pitchcaller::distribution::{allocate_counts, generate, shuffle};
use pitchcaller::grid::GridSpec;
use pitchcaller::pitches::{PitchDefinition, PitchKind};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

// --- STRATEGIES ---

// Random weights normalized to percentages summing to 100.
prop_compose! {
    fn arb_pitch_set()(
        weights in proptest::collection::vec(0u32..100, 1..9)
            .prop_filter("needs a nonzero weight", |w| w.iter().any(|&x| x > 0))
    ) -> Vec<PitchDefinition> {
        let sum: u32 = weights.iter().sum();
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                PitchDefinition::new(
                    &format!("p{}", i),
                    PitchKind::Fastball,
                    &format!("Pitch {}", i),
                    "#0077b6",
                    "PX",
                    w as f64 * 100.0 / sum as f64,
                )
            })
            .collect()
    }
}

// Row labels stay single-digit so the default scheme never collides.
prop_compose! {
    fn arb_grid()(
        columns in 1usize..=12,
        rows in 1usize..=9,
    ) -> GridSpec {
        GridSpec { columns, rows, ..GridSpec::default() }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_allocation_conserves_slots(
        pitches in arb_pitch_set(),
        total in 0usize..2_000
    ) {
        let alloc = allocate_counts(&pitches, total);
        prop_assert_eq!(alloc.iter().map(|a| a.count).sum::<usize>(), total);
    }

    #[test]
    fn test_allocation_within_one_of_exact_share(
        pitches in arb_pitch_set(),
        total in 1usize..2_000
    ) {
        for a in allocate_counts(&pitches, total) {
            let diff = (a.count as f64 - a.exact).abs();
            prop_assert!(diff < 1.0 + 1e-9, "{} got {} for exact {}", a.pitch_id, a.count, a.exact);
        }
    }

    #[test]
    fn test_allocation_is_pure(
        pitches in arb_pitch_set(),
        total in 0usize..500
    ) {
        prop_assert_eq!(allocate_counts(&pitches, total), allocate_counts(&pitches, total));
    }

    #[test]
    fn test_shuffle_is_a_permutation(
        mut deck in proptest::collection::vec(0u8..6, 0..200),
        seed in any::<u64>()
    ) {
        let mut before = deck.clone();
        shuffle(&mut deck, &mut Rng::with_seed(seed));
        before.sort_unstable();
        deck.sort_unstable();
        prop_assert_eq!(before, deck);
    }

    #[test]
    fn test_generate_covers_every_slot(
        pitches in arb_pitch_set(),
        grid in arb_grid(),
        seed in any::<u64>()
    ) {
        let signals = generate(&pitches, &grid, &mut Rng::with_seed(seed)).unwrap();
        prop_assert_eq!(signals.len(), grid.total_slots());

        let codes: HashSet<&str> = signals.iter().map(|s| s.code.as_str()).collect();
        prop_assert_eq!(codes.len(), grid.total_slots());

        let ids: HashSet<&str> = pitches.iter().map(|p| p.id.as_str()).collect();
        let mut tally: HashMap<&str, usize> = HashMap::new();
        for s in &signals {
            prop_assert!(ids.contains(s.pitch_id.as_str()));
            *tally.entry(s.pitch_id.as_str()).or_insert(0) += 1;
        }

        // The shuffled deck carries exactly the allocated counts.
        for a in allocate_counts(&pitches, grid.total_slots()) {
            prop_assert_eq!(tally.get(a.pitch_id.as_str()).copied().unwrap_or(0), a.count);
        }
    }
}
