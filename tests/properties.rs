//! Property tests for the trace generators and playback controller.
//!
//! Universal contracts: the final snapshot of a sorting trace is the input
//! sorted ascending with every index marked sorted; traces for non-empty
//! input open with a zero-progress start step and close complete; counters
//! never decrease step-to-step; searches agree with `contains`; playback
//! saturates at both ends.

use proptest::prelude::*;

use algotrace::prelude::*;
use algotrace::searching::{binary, hash, linear};
use algotrace::sorting::{bubble, insertion, merge, quick, selection};

fn small_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 1..12)
}

fn all_sorts() -> [(&'static str, fn(&[i64]) -> Trace); 5] {
    [
        ("bubble", bubble::generate as fn(&[i64]) -> Trace),
        ("selection", selection::generate),
        ("insertion", insertion::generate),
        ("merge", merge::generate),
        ("quick", quick::generate),
    ]
}

fn assert_counters_monotonic(name: &str, trace: &Trace) {
    let mut previous = Counters::ZERO;
    for (i, step) in trace.iter().enumerate() {
        assert!(
            step.counters.dominates(&previous),
            "{name}: counters decreased at step {i}"
        );
        previous = step.counters;
    }
}

proptest! {
    #[test]
    fn sorting_final_state_is_sorted_input(values in small_values()) {
        let mut expected = values.clone();
        expected.sort_unstable();

        for (name, generate) in all_sorts() {
            let trace = generate(&values);
            let last = trace.last().unwrap();
            prop_assert_eq!(
                last.state.as_array().unwrap(),
                &expected[..],
                "{} produced a wrong final state", name
            );
            prop_assert_eq!(
                last.role(Role::Sorted).unwrap(),
                &algotrace::trace::indices(0..values.len()),
                "{} did not mark every index sorted", name
            );
        }
    }

    #[test]
    fn traces_start_cold_and_end_complete(values in small_values()) {
        for (name, generate) in all_sorts() {
            let trace = generate(&values);
            prop_assert!(!trace.is_empty());

            let first = trace.first().unwrap();
            prop_assert_eq!(first.kind, StepKind::Start, "{}", name);
            prop_assert_eq!(first.counters, Counters::ZERO, "{}", name);
            prop_assert!(!first.complete);
            prop_assert_eq!(&first.state, &Snapshot::Array(values.clone()));

            let last = trace.last().unwrap();
            prop_assert!(last.complete, "{} last step not complete", name);
            // Exactly the terminal step carries the flag.
            let complete_count = trace.iter().filter(|s| s.complete).count();
            prop_assert_eq!(complete_count, 1, "{}", name);
        }
    }

    #[test]
    fn counters_never_decrease(values in small_values(), target in -50i64..50) {
        for (name, generate) in all_sorts() {
            assert_counters_monotonic(name, &generate(&values));
        }
        assert_counters_monotonic("linear", &linear::generate(&values, target));
        assert_counters_monotonic("binary", &binary::generate(&values, target));
        assert_counters_monotonic(
            "hash",
            &hash::generate(&values, target, &HashLayout::default()),
        );
    }

    #[test]
    fn generators_never_mutate_input(values in small_values()) {
        let before = values.clone();
        for (_, generate) in all_sorts() {
            let _ = generate(&values);
        }
        let _ = linear::generate(&values, 0);
        let _ = binary::generate(&values, 0);
        prop_assert_eq!(&values, &before);
    }

    #[test]
    fn linear_search_agrees_with_contains(values in small_values(), target in -50i64..50) {
        let trace = linear::generate(&values, target);
        let last = trace.last().unwrap();

        if values.contains(&target) {
            prop_assert_eq!(last.kind, StepKind::Found);
            let index = *last.role(Role::Found).unwrap().iter().next().unwrap();
            prop_assert_eq!(values[index], target);
            // First match wins.
            prop_assert!(!values[..index].contains(&target));
        } else {
            prop_assert_eq!(last.kind, StepKind::NotFound);
        }
    }

    #[test]
    fn binary_search_agrees_with_contains(values in small_values(), target in -50i64..50) {
        let trace = binary::generate(&values, target);
        let last = trace.last().unwrap();

        if values.contains(&target) {
            prop_assert_eq!(last.kind, StepKind::Found);
            let index = *last.role(Role::Found).unwrap().iter().next().unwrap();
            prop_assert_eq!(last.state.as_array().unwrap()[index], target);
        } else {
            prop_assert_eq!(last.kind, StepKind::NotFound);
        }
    }

    #[test]
    fn binary_search_bounds_invariant(values in small_values(), target in -50i64..50) {
        // The working copy is sorted internally, so low <= mid <= high at
        // every calculate-mid step regardless of input order.
        let trace = binary::generate(&values, target);
        for step in trace.iter().filter(|s| s.kind == StepKind::CalculateMid) {
            let low = *step.role(Role::Low).unwrap().iter().next().unwrap();
            let mid = *step.role(Role::Mid).unwrap().iter().next().unwrap();
            let high = *step.role(Role::High).unwrap().iter().next().unwrap();
            prop_assert!(low <= mid && mid <= high);
        }
    }

    #[test]
    fn hash_chaining_search_agrees_with_contains(
        keys in prop::collection::vec(-50i64..50, 1..10),
        target in -50i64..50,
        table_size in 1usize..9,
    ) {
        let layout = HashLayout {
            table_size,
            method: HashMethod::Division,
            policy: CollisionPolicy::Chaining,
        };
        let trace = hash::generate(&keys, target, &layout);
        let last = trace.last().unwrap();

        if keys.contains(&target) {
            prop_assert_eq!(last.kind, StepKind::Found);
        } else {
            prop_assert_eq!(last.kind, StepKind::NotFound);
        }
    }

    #[test]
    fn hash_probing_search_agrees_when_table_fits(
        keys in prop::collection::vec(-50i64..50, 1..8),
        target in -50i64..50,
        method in prop_oneof![Just(HashMethod::Division), Just(HashMethod::Multiplication)],
    ) {
        // Deduplicate so every key occupies one slot, and size the table so
        // insertion never saturates.
        let mut keys = keys;
        keys.sort_unstable();
        keys.dedup();
        let layout = HashLayout {
            table_size: keys.len() + 2,
            method,
            policy: CollisionPolicy::LinearProbing,
        };
        let trace = hash::generate(&keys, target, &layout);
        let last = trace.last().unwrap();

        if keys.contains(&target) {
            prop_assert_eq!(last.kind, StepKind::Found);
        } else {
            prop_assert_eq!(last.kind, StepKind::NotFound);
        }
    }

    #[test]
    fn playback_saturates_at_both_ends(values in small_values(), extra in 1usize..30) {
        let mut store = TraceStore::new();
        store.load(bubble::generate(&values), Algorithm::BubbleSort).unwrap();
        let len = store.len();

        for _ in 0..len + extra {
            store.advance();
        }
        prop_assert_eq!(store.current_index(), Some(len - 1));
        prop_assert!(store.at_end());

        for _ in 0..len + extra {
            store.retreat();
        }
        prop_assert_eq!(store.current_index(), Some(0));
        prop_assert!(store.at_start());
    }

    #[test]
    fn stable_sorts_preserve_duplicate_runs(values in small_values()) {
        // Behavioral stability: the stable generators never report a swap
        // or shift of two equal values, so equal elements cannot cross.
        let trace = bubble::generate(&values);
        for (i, step) in trace.iter().enumerate() {
            if step.kind == StepKind::Swap {
                // The pre-swap snapshot is the previous step's state.
                let before = trace.get(i - 1).unwrap().state.as_array().unwrap();
                let swapped = step.role(Role::Swapping).unwrap();
                let mut pair = swapped.iter();
                let (a, b) = (*pair.next().unwrap(), *pair.next().unwrap());
                prop_assert_ne!(before[a], before[b], "bubble swapped equal values");
            }
        }

        // Insertion only shifts after a comparison decided the predecessor
        // is strictly greater: every shift step directly follows a compare.
        let trace = insertion::generate(&values);
        let steps: Vec<_> = trace.iter().collect();
        for (i, step) in steps.iter().enumerate() {
            if step.kind == StepKind::Shift {
                prop_assert_eq!(steps[i - 1].kind, StepKind::Compare);
            }
        }
    }
}

#[test]
fn empty_input_yields_empty_trace_everywhere() {
    for (_, generate) in all_sorts() {
        assert!(generate(&[]).is_empty());
    }
    assert!(linear::generate(&[], 1).is_empty());
    assert!(binary::generate(&[], 1).is_empty());
    assert!(hash::generate(&[], 1, &HashLayout::default()).is_empty());

    // And the store refuses the degenerate case.
    let mut store = TraceStore::new();
    assert!(store
        .load(bubble::generate(&[]), Algorithm::BubbleSort)
        .is_err());
}
