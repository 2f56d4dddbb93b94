//! Bubble sort trace generator.
//!
//! Adjacent-pair passes, left to right. A compare step precedes every
//! comparison; a swap step is emitted only when an inversion is corrected,
//! so equal adjacent values never move (stable). Each pass closes with a
//! pass-complete step marking the trailing element sorted, and the run
//! early-exits after the first pass that performs zero swaps.

use super::Recorder;
use crate::trace::{Role, StepKind, Trace};

/// Generate a bubble sort trace over a clone of `values`.
#[must_use]
pub fn generate(values: &[i64]) -> Trace {
    let Some(mut rec) = Recorder::start(values, "bubble sort") else {
        return Trace::new();
    };
    let n = rec.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - 1 - pass {
            rec.compared();
            let step = rec
                .step(
                    StepKind::Compare,
                    format!(
                        "Comparing {} at index {j} with {} at index {}",
                        rec.value(j),
                        rec.value(j + 1),
                        j + 1
                    ),
                )
                .with_role(Role::Comparing, [j, j + 1]);
            rec.emit(step);

            if rec.value(j) > rec.value(j + 1) {
                rec.swap(j, j + 1);
                swapped = true;
                let step = rec
                    .step(
                        StepKind::Swap,
                        format!(
                            "Swapped {} and {}: inversion at indices {j} and {}",
                            rec.value(j + 1),
                            rec.value(j),
                            j + 1
                        ),
                    )
                    .with_role(Role::Swapping, [j, j + 1]);
                rec.emit(step);
            }
        }

        let settled = n - 1 - pass;
        rec.mark_sorted(settled);
        let step = rec.step(
            StepKind::PassComplete,
            format!("Pass {} complete: index {settled} is in final position", pass + 1),
        );
        rec.emit(step);

        if !swapped {
            break;
        }
    }

    rec.finish()
}
