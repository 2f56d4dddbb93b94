//! Linear search trace generator.
//!
//! Scans indices left to right, one visit step per element, terminating at
//! the first match (lowest index wins on ties) or with a not-found step
//! after exhausting the sequence.

use crate::trace::{Counters, Role, Snapshot, Step, StepKind, Trace};

/// Generate a linear search trace over `values`, looking for `target`.
#[must_use]
pub fn generate(values: &[i64], target: i64) -> Trace {
    if values.is_empty() {
        return Trace::new();
    }

    let snapshot = || Snapshot::Array(values.to_vec());
    let mut trace = Trace::new();
    let mut counters = Counters::ZERO;

    trace.push(Step::new(
        StepKind::Start,
        snapshot(),
        counters,
        format!("Searching for {target} across {} elements", values.len()),
    ));

    for (index, &value) in values.iter().enumerate() {
        counters.comparisons += 1;
        trace.push(
            Step::new(
                StepKind::Visit,
                snapshot(),
                counters,
                format!("Visiting index {index}: {value}"),
            )
            .with_role(Role::Current, [index])
            .with_role(Role::Eliminated, 0..index),
        );

        if value == target {
            trace.push(
                Step::new(
                    StepKind::Found,
                    snapshot(),
                    counters,
                    format!("Found {target} at index {index} after {} comparisons", counters.comparisons),
                )
                .with_role(Role::Found, [index])
                .with_role(Role::Eliminated, 0..index)
                .finished(),
            );
            return trace;
        }
    }

    trace.push(
        Step::new(
            StepKind::NotFound,
            snapshot(),
            counters,
            format!(
                "{target} is not in the array; exhausted all {} elements",
                values.len()
            ),
        )
        .with_role(Role::Eliminated, 0..values.len())
        .finished(),
    );
    trace
}
