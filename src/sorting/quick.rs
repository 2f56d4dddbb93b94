//! Quick sort trace generator.
//!
//! Lomuto partitioning with the last element of each subrange as pivot:
//! a compare step per scanned element, a swap step only when a
//! strictly-less element actually relocates, and one place-pivot step per
//! partition. Recursion handles the left subrange before the right, and
//! single-element subranges get an explicit mark-sorted step so the sorted
//! set covers every index by completion.

use super::Recorder;
use crate::trace::{Role, StepKind, Trace};

/// Generate a quick sort trace over a clone of `values`.
#[must_use]
pub fn generate(values: &[i64]) -> Trace {
    let Some(mut rec) = Recorder::start(values, "quick sort") else {
        return Trace::new();
    };
    let n = rec.len();
    if n > 0 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish()
}

fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    if low == high {
        if !rec.is_marked_sorted(low) {
            rec.mark_sorted(low);
            let step = rec.step(
                StepKind::MarkSorted,
                format!("Single-element range: index {low} is in final position"),
            );
            rec.emit(step);
        }
        return;
    }
    if low > high {
        return;
    }

    let pivot_index = partition(rec, low, high);

    if pivot_index > low {
        sort_range(rec, low, pivot_index - 1);
    }
    if pivot_index < high {
        sort_range(rec, pivot_index + 1, high);
    }
}

/// Lomuto partition over `low..=high` with `values[high]` as pivot.
/// Returns the pivot's final index.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    let mut boundary = low;

    for j in low..high {
        rec.compared();
        let step = rec
            .step(
                StepKind::Compare,
                format!(
                    "Comparing {} at index {j} with pivot {pivot}",
                    rec.value(j)
                ),
            )
            .with_role(Role::Pivot, [high])
            .with_role(Role::Comparing, [j]);
        rec.emit(step);

        if rec.value(j) < pivot {
            if boundary != j {
                rec.swap(boundary, j);
                let step = rec
                    .step(
                        StepKind::Swap,
                        format!(
                            "Moved {} below the pivot boundary at index {boundary}",
                            rec.value(boundary)
                        ),
                    )
                    .with_role(Role::Pivot, [high])
                    .with_role(Role::Swapping, [boundary, j]);
                rec.emit(step);
            }
            boundary += 1;
        }
    }

    if boundary != high {
        rec.swap(boundary, high);
    }
    rec.mark_sorted(boundary);
    let step = rec
        .step(
            StepKind::PlacePivot,
            format!("Placed pivot {pivot} at final index {boundary}"),
        )
        .with_role(Role::Pivot, [boundary]);
    rec.emit(step);

    boundary
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::trace::{Role, StepKind};

    #[test]
    fn test_empty_input_empty_trace() {
        assert!(generate(&[]).is_empty());
    }

    #[test]
    fn test_sorts_ascending() {
        let trace = generate(&[10, 7, 8, 9, 1, 5]);
        assert_eq!(
            trace.last().unwrap().state.as_array(),
            Some(&[1, 5, 7, 8, 9, 10][..])
        );
    }

    #[test]
    fn test_first_pivot_lands_at_index_one() {
        // Lomuto with last-element pivot on [10,7,8,9,1,5]: the first pivot
        // is 5 and ends at index 1, lower partition {1}.
        let trace = generate(&[10, 7, 8, 9, 1, 5]);
        let first_pivot = trace
            .iter()
            .find(|s| s.kind == StepKind::PlacePivot)
            .unwrap();
        assert!(first_pivot.description.contains("pivot 5"));
        assert_eq!(first_pivot.role(Role::Pivot), Some(&crate::trace::indices([1])));
        assert_eq!(first_pivot.state.as_array().unwrap()[1], 5);
        assert_eq!(first_pivot.state.as_array().unwrap()[0], 1);
    }

    #[test]
    fn test_sorted_set_covers_all_indices() {
        let trace = generate(&[3, 1, 4, 1, 5, 9, 2, 6]);
        let last = trace.last().unwrap();
        assert_eq!(
            last.role(Role::Sorted),
            Some(&crate::trace::indices(0..8))
        );
    }

    #[test]
    fn test_one_place_pivot_per_partition() {
        // n = 2: a single partition, then single-element handling.
        let trace = generate(&[2, 1]);
        let pivots = trace
            .iter()
            .filter(|s| s.kind == StepKind::PlacePivot)
            .count();
        assert_eq!(pivots, 1);
    }

    #[test]
    fn test_no_swap_step_without_relocation() {
        // Already partitioned input: scan finds no strictly-less element
        // out of place, so no swap steps are emitted during scans.
        let trace = generate(&[1, 2, 3]);
        let scan_swaps = trace.iter().filter(|s| s.kind == StepKind::Swap).count();
        assert_eq!(scan_swaps, 0);
    }

    #[test]
    fn test_duplicates_sort_correctly() {
        let trace = generate(&[5, 5, 3, 5, 1]);
        assert_eq!(
            trace.last().unwrap().state.as_array(),
            Some(&[1, 3, 5, 5, 5][..])
        );
    }

    #[test]
    fn test_single_element_ranges_marked() {
        let trace = generate(&[4, 2, 7, 1]);
        let last = trace.last().unwrap();
        assert_eq!(last.role(Role::Sorted), Some(&crate::trace::indices(0..4)));
    }
}
