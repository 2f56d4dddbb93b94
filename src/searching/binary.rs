//! Binary search trace generator.
//!
//! The generator sorts its own working copy ascending before searching, so
//! the trace is always over a sorted snapshot; warning the user that their
//! displayed input was unsorted is renderer policy, not handled here.
//!
//! Each iteration emits a calculate-mid step, then either a terminal found
//! step or an eliminate step folding every newly out-of-range index into a
//! running eliminated set.

use std::collections::BTreeSet;

use crate::trace::{Counters, Role, Snapshot, Step, StepKind, Trace};

/// Generate a binary search trace over a sorted copy of `values`.
#[must_use]
pub fn generate(values: &[i64], target: i64) -> Trace {
    if values.is_empty() {
        return Trace::new();
    }

    let mut working = values.to_vec();
    working.sort_unstable();

    let snapshot = || Snapshot::Array(working.clone());
    let mut trace = Trace::new();
    let mut counters = Counters::ZERO;
    let mut eliminated: BTreeSet<usize> = BTreeSet::new();

    trace.push(Step::new(
        StepKind::Start,
        snapshot(),
        counters,
        format!(
            "Searching for {target} in a sorted working copy of {} elements",
            working.len()
        ),
    ));

    // Signed bounds: `high` goes to -1 when the range empties at index 0.
    let mut low: i64 = 0;
    let mut high: i64 = working.len() as i64 - 1;

    while low <= high {
        let mid = (low + high) / 2;
        let (low_u, mid_u, high_u) = (low as usize, mid as usize, high as usize);

        trace.push(
            Step::new(
                StepKind::CalculateMid,
                snapshot(),
                counters,
                format!("Calculated mid = ({low} + {high}) / 2 = {mid}"),
            )
            .with_role(Role::Low, [low_u])
            .with_role(Role::Mid, [mid_u])
            .with_role(Role::High, [high_u])
            .with_role(Role::Eliminated, eliminated.iter().copied()),
        );

        counters.comparisons += 1;
        let probe = working[mid_u];

        if probe == target {
            trace.push(
                Step::new(
                    StepKind::Found,
                    snapshot(),
                    counters,
                    format!(
                        "Found {target} at index {mid} after {} comparisons",
                        counters.comparisons
                    ),
                )
                .with_role(Role::Found, [mid_u])
                .with_role(Role::Eliminated, eliminated.iter().copied())
                .finished(),
            );
            return trace;
        }

        if probe < target {
            eliminated.extend(low_u..=mid_u);
            trace.push(
                Step::new(
                    StepKind::EliminateLeft,
                    snapshot(),
                    counters,
                    format!(
                        "{probe} < {target}: eliminated indices {low} through {mid}"
                    ),
                )
                .with_role(Role::Eliminated, eliminated.iter().copied()),
            );
            low = mid + 1;
        } else {
            eliminated.extend(mid_u..=high_u);
            trace.push(
                Step::new(
                    StepKind::EliminateRight,
                    snapshot(),
                    counters,
                    format!(
                        "{probe} > {target}: eliminated indices {mid} through {high}"
                    ),
                )
                .with_role(Role::Eliminated, eliminated.iter().copied()),
            );
            high = mid - 1;
        }
    }

    trace.push(
        Step::new(
            StepKind::NotFound,
            snapshot(),
            counters,
            format!(
                "{target} is not in the array; range emptied after {} comparisons",
                counters.comparisons
            ),
        )
        .with_role(Role::Eliminated, eliminated.iter().copied())
        .finished(),
    );
    trace
}
