//! Sorting trace generators.
//!
//! One generator per algorithm, all with the same contract:
//! `generate(values: &[i64]) -> Trace`. The input is cloned before any
//! scratch mutation, so callers keep their sequence untouched. Empty input
//! yields an empty trace; otherwise the trace opens with a start step and
//! closes with a complete step whose sorted-index set covers every position
//! and whose description reports the final aggregate counters.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use std::collections::BTreeSet;

use crate::trace::{Counters, Role, Snapshot, Step, StepKind, Trace};

/// Shared scratchpad for the sorting generators.
///
/// Owns the working copy of the values, the trace under construction, the
/// running counters, and the set of indices already in final position. Every
/// emitted step snapshots the working copy and carries the sorted set as a
/// [`Role::Sorted`] index set.
pub(crate) struct Recorder {
    values: Vec<i64>,
    trace: Trace,
    counters: Counters,
    sorted: BTreeSet<usize>,
}

impl Recorder {
    fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            trace: Trace::new(),
            counters: Counters::ZERO,
            sorted: BTreeSet::new(),
        }
    }

    /// Start a recorder and emit the start step, or return `None` for empty
    /// input (the degenerate empty-trace case).
    fn start(values: &[i64], algorithm: &str) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut recorder = Self::new(values);
        let step = recorder.step(
            StepKind::Start,
            format!("Starting {algorithm} on {} elements", values.len()),
        );
        recorder.emit(step);
        Some(recorder)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> i64 {
        self.values[index]
    }

    /// Build a step from the current working copy, counters, and sorted set.
    /// Additional roles are attached by the caller before emitting.
    fn step(&self, kind: StepKind, description: impl Into<String>) -> Step {
        Step::new(
            kind,
            Snapshot::Array(self.values.clone()),
            self.counters,
            description,
        )
        .with_role(Role::Sorted, self.sorted.iter().copied())
    }

    fn emit(&mut self, step: Step) {
        self.trace.push(step);
    }

    /// Count one comparison.
    fn compared(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Exchange two elements and count the swap.
    fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.counters.swaps += 1;
    }

    /// Move one element and count the shift.
    fn shift(&mut self, from: usize, to: usize) {
        self.values[to] = self.values[from];
        self.counters.shifts += 1;
    }

    /// Overwrite one slot without counting (merge write-back, key insert).
    fn place(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    /// Count one element move that is not an in-place shift (merge write-back).
    fn moved(&mut self) {
        self.counters.shifts += 1;
    }

    fn mark_sorted(&mut self, index: usize) {
        self.sorted.insert(index);
    }

    fn is_marked_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// Emit the terminal step: every index sorted, aggregate counters in the
    /// description.
    fn finish(mut self) -> Trace {
        for index in 0..self.values.len() {
            self.sorted.insert(index);
        }
        let step = self
            .step(
                StepKind::Complete,
                format!("Array sorted ({})", self.counters),
            )
            .finished();
        self.emit(step);
        self.trace
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_empty_input() {
        assert!(Recorder::start(&[], "bubble sort").is_none());
    }

    #[test]
    fn test_recorder_start_step() {
        let recorder = Recorder::start(&[3, 1], "bubble sort").unwrap();
        let trace = recorder.finish();
        let first = trace.first().unwrap();
        assert_eq!(first.kind, StepKind::Start);
        assert_eq!(first.counters, Counters::ZERO);
        assert!(!first.complete);
    }

    #[test]
    fn test_recorder_does_not_mutate_input() {
        let input = vec![3, 1, 2];
        let mut recorder = Recorder::start(&input, "test").unwrap();
        recorder.swap(0, 1);
        let _ = recorder.finish();
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn test_recorder_finish_marks_all_sorted() {
        let recorder = Recorder::start(&[2, 1], "test").unwrap();
        let trace = recorder.finish();
        let last = trace.last().unwrap();
        assert!(last.complete);
        assert_eq!(last.role(Role::Sorted), Some(&crate::trace::indices([0, 1])));
        assert!(last.description.contains("comparisons"));
    }

    #[test]
    fn test_recorder_counters() {
        let mut recorder = Recorder::start(&[2, 1], "test").unwrap();
        recorder.compared();
        recorder.swap(0, 1);
        recorder.shift(0, 1);
        let trace = recorder.finish();
        let last = trace.last().unwrap();
        assert_eq!(last.counters.comparisons, 1);
        assert_eq!(last.counters.swaps, 1);
        assert_eq!(last.counters.shifts, 1);
        assert_eq!(last.state.as_array(), Some(&[1, 1][..]));
    }
}
