//! Merge sort trace generator.
//!
//! Top-down recursion, dividing at `mid = (left + right) / 2`. The merge
//! emits one step per element placed back into the working array, with the
//! `<=` comparison favoring the left half on ties (stable), then copy steps
//! for whichever side remains after the other exhausts, and a single
//! merge-complete step per merged range.

use super::Recorder;
use crate::trace::{Role, StepKind, Trace};

/// Generate a merge sort trace over a clone of `values`.
#[must_use]
pub fn generate(values: &[i64]) -> Trace {
    let Some(mut rec) = Recorder::start(values, "merge sort") else {
        return Trace::new();
    };
    let n = rec.len();
    if n > 1 {
        sort_range(&mut rec, 0, n - 1);
    }
    rec.finish()
}

fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    sort_range(rec, left, mid);
    sort_range(rec, mid + 1, right);
    merge(rec, left, mid, right);
}

fn merge(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let lhs: Vec<i64> = (left..=mid).map(|i| rec.value(i)).collect();
    let rhs: Vec<i64> = (mid + 1..=right).map(|i| rec.value(i)).collect();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < lhs.len() && j < rhs.len() {
        rec.compared();
        let (value, side) = if lhs[i] <= rhs[j] {
            i += 1;
            (lhs[i - 1], "left")
        } else {
            j += 1;
            (rhs[j - 1], "right")
        };
        rec.place(k, value);
        rec.moved();
        let step = rec
            .step(
                StepKind::Insert,
                format!("Placed {value} at index {k} from the {side} half"),
            )
            .with_role(Role::MergeRange, left..=right)
            .with_role(Role::Current, [k]);
        rec.emit(step);
        k += 1;
    }

    while i < lhs.len() {
        rec.place(k, lhs[i]);
        rec.moved();
        let step = rec
            .step(
                StepKind::Insert,
                format!("Copied remaining {} at index {k} from the left half", lhs[i]),
            )
            .with_role(Role::MergeRange, left..=right)
            .with_role(Role::Current, [k]);
        rec.emit(step);
        i += 1;
        k += 1;
    }

    while j < rhs.len() {
        rec.place(k, rhs[j]);
        rec.moved();
        let step = rec
            .step(
                StepKind::Insert,
                format!(
                    "Copied remaining {} at index {k} from the right half",
                    rhs[j]
                ),
            )
            .with_role(Role::MergeRange, left..=right)
            .with_role(Role::Current, [k]);
        rec.emit(step);
        j += 1;
        k += 1;
    }

    let step = rec
        .step(
            StepKind::MergeComplete,
            format!("Merged indices {left} through {right}"),
        )
        .with_role(Role::MergeRange, left..=right);
    rec.emit(step);
}
