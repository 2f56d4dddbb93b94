//! End-to-end scenarios over the public API: concrete traces with known
//! step counts, counters, and outcomes, plus the store/playback contract
//! the renderer relies on.

use algotrace::prelude::*;
use algotrace::searching::{binary, hash, linear};
use algotrace::sorting::{bubble, insertion, merge, quick, selection};
use algotrace::trace::{indices, Bucket};

#[test]
fn bubble_sort_five_three_one() {
    let trace = bubble::generate(&[5, 3, 1]);

    let first = trace.first().expect("non-empty trace");
    assert_eq!(first.kind, StepKind::Start);
    assert_eq!(first.counters, Counters::ZERO);
    assert_eq!(first.state.as_array(), Some(&[5, 3, 1][..]));

    let last = trace.last().expect("non-empty trace");
    assert!(last.complete);
    assert_eq!(last.state.as_array(), Some(&[1, 3, 5][..]));
    assert_eq!(last.role(Role::Sorted), Some(&indices([0, 1, 2])));
    assert_eq!(last.counters.comparisons, 3);
    assert_eq!(last.counters.swaps, 3);
    assert!(last.description.contains("comparisons: 3"));
}

#[test]
fn binary_search_classic_array_finds_23_at_index_5() {
    let trace = binary::generate(&[2, 5, 8, 12, 16, 23, 38], 23);

    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.kind, StepKind::Found);
    assert_eq!(last.role(Role::Found), Some(&indices([5])));
    assert_eq!(last.state.as_array().expect("array snapshot")[5], 23);
    // 12 then 23: two comparisons.
    assert_eq!(last.counters.comparisons, 2);
}

#[test]
fn hash_chaining_collision_buckets() {
    let layout = HashLayout {
        table_size: 7,
        method: HashMethod::Division,
        policy: CollisionPolicy::Chaining,
    };
    let trace = hash::generate(&[15, 25, 35, 10, 33, 12], 12, &layout);

    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.kind, StepKind::Found);
    assert_eq!(last.role(Role::Found), Some(&indices([5])));
    assert!(last.description.contains("chain position 1"));

    let buckets = last.state.as_buckets().expect("bucket snapshot");
    assert_eq!(buckets[1], Bucket::Chain(vec![15]));
    assert_eq!(buckets[4], Bucket::Chain(vec![25]));
    assert_eq!(buckets[0], Bucket::Chain(vec![35]));
    assert_eq!(buckets[3], Bucket::Chain(vec![10]));
    assert_eq!(buckets[5], Bucket::Chain(vec![33, 12]));
    assert_eq!(buckets[2], Bucket::Chain(vec![]));
    assert_eq!(buckets[6], Bucket::Chain(vec![]));
}

#[test]
fn quicksort_lomuto_first_pivot_placement() {
    let trace = quick::generate(&[10, 7, 8, 9, 1, 5]);

    let first_pivot = trace
        .iter()
        .find(|s| s.kind == StepKind::PlacePivot)
        .expect("at least one partition");
    assert!(first_pivot.description.contains("pivot 5"));
    assert_eq!(first_pivot.role(Role::Pivot), Some(&indices([1])));

    let state = first_pivot.state.as_array().expect("array snapshot");
    assert_eq!(state[0], 1, "lower partition is {{1}}");
    assert_eq!(state[1], 5, "pivot placed at final index 1");

    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.state.as_array(), Some(&[1, 5, 7, 8, 9, 10][..]));
    assert_eq!(last.role(Role::Sorted), Some(&indices(0..6)));
}

#[test]
fn linear_search_finds_first_of_duplicates() {
    let trace = linear::generate(&[7, 3, 7], 7);
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.kind, StepKind::Found);
    assert_eq!(last.role(Role::Found), Some(&indices([0])));
}

#[test]
fn every_sort_agrees_on_the_final_array() {
    let input = [9, 5, 1, 4, 3];
    let expected = [1, 3, 4, 5, 9];

    for generate in [
        bubble::generate,
        selection::generate,
        insertion::generate,
        merge::generate,
        quick::generate,
    ] {
        let trace = generate(&input);
        let last = trace.last().expect("non-empty trace");
        assert_eq!(last.state.as_array(), Some(&expected[..]));
        assert!(last.complete);
        assert_eq!(last.role(Role::Sorted), Some(&indices(0..5)));
    }
}

#[test]
fn store_switch_between_families_is_atomic() {
    let mut store = TraceStore::new();
    store
        .load(bubble::generate(&[3, 1]), Algorithm::BubbleSort)
        .expect("load sorting trace");
    store.advance();
    assert_eq!(store.family(), Some(AlgorithmFamily::Sorting));

    // Switch algorithms: the store is replaced wholesale, index reset, and
    // the context tag always matches the loaded trace.
    store
        .reload(
            hash::generate(&[15, 25], 25, &HashLayout::default()),
            Algorithm::HashSearch,
        )
        .expect("load hash trace");

    assert_eq!(store.family(), Some(AlgorithmFamily::Hashing));
    assert!(store.at_start());
    let step = store.current_step().expect("loaded");
    assert!(step.state.as_buckets().is_some());
}

#[test]
fn store_clear_on_selection_change() {
    let mut store = TraceStore::new();
    store
        .load(linear::generate(&[1, 2], 2), Algorithm::LinearSearch)
        .expect("load");

    store.clear();
    assert!(store.is_empty());
    assert!(store.current_step().is_none(), "renderer sees no step");
}

#[test]
fn full_playback_walk_reaches_terminal_step() {
    let mut store = TraceStore::new();
    store
        .load(
            binary::generate(&[2, 5, 8, 12, 16, 23, 38], 4),
            Algorithm::BinarySearch,
        )
        .expect("load");

    let mut steps_seen = 0;
    loop {
        assert!(store.current_step().is_some());
        steps_seen += 1;
        if store.at_end() {
            break;
        }
        store.advance();
    }
    assert_eq!(steps_seen, store.len());
    assert_eq!(
        store.current_step().map(|s| s.kind),
        Some(StepKind::NotFound)
    );

    // Walk back to the start.
    while !store.at_start() {
        store.retreat();
    }
    assert_eq!(store.current_step().map(|s| s.kind), Some(StepKind::Start));
}

#[test]
fn config_driven_run_matches_direct_generator_call() {
    let config = RunConfig::builder()
        .algorithm(Algorithm::InsertionSort)
        .values([4, 2, 3])
        .build();
    let via_config = config.run().expect("valid config");
    let direct = insertion::generate(&[4, 2, 3]);
    assert_eq!(via_config, direct);
}

#[test]
fn merge_sort_descriptions_name_the_halves() {
    let trace = merge::generate(&[2, 1]);
    let placements: Vec<_> = trace
        .iter()
        .filter(|s| s.kind == StepKind::Insert)
        .collect();
    assert_eq!(placements.len(), 2);
    assert!(placements[0].description.contains("right half"));
    assert!(placements[1].description.contains("left half"));
}
