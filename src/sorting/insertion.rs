//! Insertion sort trace generator.
//!
//! For each position the key is lifted out and strictly-greater
//! predecessors are shifted right one at a time; the scan stops at the
//! first predecessor less than or equal to the key, so equal elements keep
//! their relative order (stable). While the key is lifted the snapshot
//! shows the duplicated predecessor in the hole, the same transient shape a
//! bar renderer animates.

use super::Recorder;
use crate::trace::{Role, StepKind, Trace};

/// Generate an insertion sort trace over a clone of `values`.
#[must_use]
pub fn generate(values: &[i64]) -> Trace {
    let Some(mut rec) = Recorder::start(values, "insertion sort") else {
        return Trace::new();
    };
    let n = rec.len();

    for i in 1..n {
        let key = rec.value(i);
        let mut hole = i;

        while hole > 0 {
            rec.compared();
            let step = rec
                .step(
                    StepKind::Compare,
                    format!(
                        "Comparing key {key} with {} at index {}",
                        rec.value(hole - 1),
                        hole - 1
                    ),
                )
                .with_role(Role::Key, [hole])
                .with_role(Role::Comparing, [hole - 1]);
            rec.emit(step);

            if rec.value(hole - 1) <= key {
                break;
            }

            rec.shift(hole - 1, hole);
            let step = rec
                .step(
                    StepKind::Shift,
                    format!(
                        "Shifted {} right from index {} to index {hole}",
                        rec.value(hole),
                        hole - 1
                    ),
                )
                .with_role(Role::Key, [hole - 1])
                .with_role(Role::Swapping, [hole - 1, hole]);
            rec.emit(step);
            hole -= 1;
        }

        rec.place(hole, key);
        let step = rec
            .step(
                StepKind::Insert,
                format!("Inserted key {key} at index {hole}"),
            )
            .with_role(Role::Key, [hole]);
        rec.emit(step);
    }

    rec.finish()
}
