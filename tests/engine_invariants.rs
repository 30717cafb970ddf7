//! Property tests: structural invariants every engine must uphold on
//! arbitrary traces, regardless of policy.

use std::collections::HashSet;

use proptest::prelude::*;

use evictsim::{Engine, EngineKind, Outcome};

fn kind_strategy() -> impl Strategy<Value = EngineKind> {
    prop_oneof![
        Just(EngineKind::Fifo),
        Just(EngineKind::Lru),
        Just(EngineKind::Lfu),
    ]
}

/// Small page universe so traces revisit pages often enough to exercise hits
/// and evictions, not just cold faults.
fn trace_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..16, 0..64)
}

fn replay(kind: EngineKind, capacity: usize, trace: &[u32]) -> Vec<Outcome<u32>> {
    let mut engine = Engine::new(kind, capacity).unwrap();
    trace.iter().map(|&page| engine.process(page)).collect()
}

proptest! {
    #[test]
    fn resident_count_never_exceeds_capacity(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        for outcome in replay(kind, capacity, &trace) {
            prop_assert_eq!(outcome.snapshot.len(), capacity);
            prop_assert!(outcome.resident_count() <= capacity);
        }
    }

    #[test]
    fn no_duplicate_resident_pages(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        for outcome in replay(kind, capacity, &trace) {
            let residents: Vec<u32> = outcome.snapshot.iter().flatten().copied().collect();
            let distinct: HashSet<u32> = residents.iter().copied().collect();
            prop_assert_eq!(residents.len(), distinct.len());
        }
    }

    #[test]
    fn counters_partition_the_steps(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        for (step, outcome) in replay(kind, capacity, &trace).iter().enumerate() {
            prop_assert_eq!(outcome.steps_so_far(), (step + 1) as u64);
        }
    }

    #[test]
    fn requested_page_is_always_resident_afterwards(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut engine = Engine::new(kind, capacity).unwrap();
        for &page in &trace {
            let outcome = engine.process(page);
            prop_assert!(outcome.snapshot.contains(&Some(page)));
            prop_assert!(engine.contains(&page));
        }
    }

    #[test]
    fn eviction_only_happens_on_faults_at_full_capacity(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut residents_before = 0usize;
        for outcome in replay(kind, capacity, &trace) {
            if outcome.evicted.is_some() {
                prop_assert!(outcome.is_fault());
                prop_assert_eq!(residents_before, capacity);
            }
            residents_before = outcome.resident_count();
        }
    }

    #[test]
    fn evicted_page_leaves_the_cache(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        for outcome in replay(kind, capacity, &trace) {
            if let Some(victim) = outcome.evicted {
                prop_assert!(!outcome.snapshot.contains(&Some(victim)));
            }
        }
    }

    #[test]
    fn replay_is_deterministic(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let first = replay(kind, capacity, &trace);
        let second = replay(kind, capacity, &trace);
        prop_assert_eq!(first, second);
    }
}
