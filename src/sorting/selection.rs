//! Selection sort trace generator.
//!
//! One swap per outer pass at most. The scan emits a compare step per
//! examined element and a new-minimum step when a strictly smaller value is
//! found; ties keep the earlier index, which is what makes selection sort
//! unstable across passes.

use super::Recorder;
use crate::trace::{Role, StepKind, Trace};

/// Generate a selection sort trace over a clone of `values`.
#[must_use]
pub fn generate(values: &[i64]) -> Trace {
    let Some(mut rec) = Recorder::start(values, "selection sort") else {
        return Trace::new();
    };
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;

        for j in i + 1..n {
            rec.compared();
            let step = rec
                .step(
                    StepKind::Compare,
                    format!(
                        "Comparing {} at index {j} with current minimum {} at index {min}",
                        rec.value(j),
                        rec.value(min)
                    ),
                )
                .with_role(Role::Comparing, [j])
                .with_role(Role::Minimum, [min]);
            rec.emit(step);

            if rec.value(j) < rec.value(min) {
                min = j;
                let step = rec
                    .step(
                        StepKind::NewMinimum,
                        format!("New minimum {} at index {j}", rec.value(j)),
                    )
                    .with_role(Role::Minimum, [min]);
                rec.emit(step);
            }
        }

        if min != i {
            rec.swap(i, min);
            let step = rec
                .step(
                    StepKind::Swap,
                    format!(
                        "Swapped minimum {} into index {i}, moving {} to index {min}",
                        rec.value(i),
                        rec.value(min)
                    ),
                )
                .with_role(Role::Swapping, [i, min]);
            rec.emit(step);
        }

        rec.mark_sorted(i);
        let step = rec.step(
            StepKind::PassComplete,
            format!("Pass {} complete: index {i} is in final position", i + 1),
        );
        rec.emit(step);
    }

    if n > 0 {
        rec.mark_sorted(n - 1);
    }
    rec.finish()
}
