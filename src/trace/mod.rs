//! Core trace data model.
//!
//! A [`Trace`] is the complete, eagerly-computed record of one algorithm
//! run: an ordered sequence of [`Step`]s, each a freeze-frame of the data
//! structure plus annotations (role indices, running counters, a
//! human-readable description, and a [`StepKind`] tag).
//!
//! Steps are tagged variants, never duck-typed: consumers pattern-match on
//! [`Snapshot`] and [`StepKind`] instead of probing for optional fields.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

// ============================================================================
// Snapshots
// ============================================================================

/// Full data-structure snapshot at one moment of algorithm execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data", rename_all = "kebab-case")]
pub enum Snapshot {
    /// An ordered sequence of values (sorting, linear or binary search).
    Array(Vec<i64>),
    /// A hash table: one bucket per table slot.
    Buckets(Vec<Bucket>),
}

impl Snapshot {
    /// Number of positions role indices may refer to.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Array(values) => values.len(),
            Self::Buckets(buckets) => buckets.len(),
        }
    }

    /// True when the snapshot holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the snapshot as an array, if it is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            Self::Array(values) => Some(values),
            Self::Buckets(_) => None,
        }
    }

    /// View the snapshot as hash buckets, if it is one.
    #[must_use]
    pub fn as_buckets(&self) -> Option<&[Bucket]> {
        match self {
            Self::Buckets(buckets) => Some(buckets),
            Self::Array(_) => None,
        }
    }
}

/// One hash-table slot.
///
/// The variant is fixed by the collision policy for the whole table:
/// chaining tables hold [`Bucket::Chain`] in every slot, linear-probing
/// tables hold [`Bucket::Slot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "keys", rename_all = "kebab-case")]
pub enum Bucket {
    /// Growable chain of keys, in insertion order.
    Chain(Vec<i64>),
    /// At most one key.
    Slot(Option<i64>),
}

impl Bucket {
    /// Number of keys currently held in this bucket.
    #[must_use]
    pub fn key_count(&self) -> usize {
        match self {
            Self::Chain(keys) => keys.len(),
            Self::Slot(slot) => usize::from(slot.is_some()),
        }
    }
}

// ============================================================================
// Roles
// ============================================================================

/// Semantic role a set of positions plays at one step.
///
/// Positions index into the step's [`Snapshot`]: element indices for arrays,
/// bucket indices for hash tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Elements currently being compared.
    Comparing,
    /// Elements being exchanged.
    Swapping,
    /// Elements in their final sorted position.
    Sorted,
    /// Current partition pivot.
    Pivot,
    /// Key element being inserted (insertion sort).
    Key,
    /// Current minimum candidate (selection sort).
    Minimum,
    /// Lower search boundary.
    Low,
    /// Midpoint under examination.
    Mid,
    /// Upper search boundary.
    High,
    /// Position where the target was found.
    Found,
    /// Positions ruled out of the search range.
    Eliminated,
    /// Position currently visited.
    Current,
    /// Range being merged (merge sort).
    MergeRange,
    /// Bucket currently probed (hash table).
    Probing,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Sorted => "sorted",
            Self::Pivot => "pivot",
            Self::Key => "key",
            Self::Minimum => "minimum",
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
            Self::Found => "found",
            Self::Eliminated => "eliminated",
            Self::Current => "current",
            Self::MergeRange => "merge-range",
            Self::Probing => "probing",
        };
        write!(f, "{name}")
    }
}

/// Named index sets for one step, keyed by [`Role`].
pub type RoleMap = BTreeMap<Role, BTreeSet<usize>>;

/// Collect positions into a role index set.
#[must_use]
pub fn indices<I: IntoIterator<Item = usize>>(positions: I) -> BTreeSet<usize> {
    positions.into_iter().collect()
}

// ============================================================================
// Counters
// ============================================================================

/// Running operation totals, carried on every step.
///
/// Each field is non-decreasing across a trace; a fresh trace starts from
/// all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Value comparisons performed so far.
    pub comparisons: u64,
    /// Element exchanges performed so far.
    pub swaps: u64,
    /// One-position element moves performed so far (insertion sort).
    pub shifts: u64,
    /// Hash-table probes performed so far.
    pub probes: u64,
}

impl Counters {
    /// All-zero counters.
    pub const ZERO: Self = Self {
        comparisons: 0,
        swaps: 0,
        shifts: 0,
        probes: 0,
    };

    /// True when every field is at least as large as in `earlier`.
    #[must_use]
    pub const fn dominates(&self, earlier: &Self) -> bool {
        self.comparisons >= earlier.comparisons
            && self.swaps >= earlier.swaps
            && self.shifts >= earlier.shifts
            && self.probes >= earlier.probes
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}, swaps: {}, shifts: {}, probes: {}",
            self.comparisons, self.swaps, self.shifts, self.probes
        )
    }
}

// ============================================================================
// Step kinds
// ============================================================================

/// Classification tag for one step.
///
/// Consumers use the kind to special-case rendering; it is not required for
/// the correctness of the trace itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Initial configuration, no progress made.
    Start,
    /// Two values compared.
    Compare,
    /// Two elements exchanged.
    Swap,
    /// A strictly smaller minimum candidate found (selection sort).
    NewMinimum,
    /// An element moved one position right (insertion sort).
    Shift,
    /// The key placed into its slot (insertion sort).
    Insert,
    /// One outer pass finished (bubble/selection sort).
    PassComplete,
    /// One range fully merged (merge sort).
    MergeComplete,
    /// Pivot moved to its final position (quick sort).
    PlacePivot,
    /// Positions marked as finally sorted without a move.
    MarkSorted,
    /// One element visited (linear search).
    Visit,
    /// Midpoint computed (binary search).
    CalculateMid,
    /// Left part of the range ruled out (binary search).
    EliminateLeft,
    /// Right part of the range ruled out (binary search).
    EliminateRight,
    /// A key inserted into the hash table.
    InsertKey,
    /// One bucket probed (hash table).
    Probe,
    /// Probe sequence wrapped around a full table; key skipped.
    TableFull,
    /// Hash-table construction finished, search begins.
    SearchStart,
    /// Target located; terminal for searches.
    Found,
    /// Target absent; terminal for searches.
    NotFound,
    /// Run finished; terminal for sorts.
    Complete,
}

impl StepKind {
    /// True for kinds that may only appear on a terminal step.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::NotFound | Self::Complete)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::NewMinimum => "new-minimum",
            Self::Shift => "shift",
            Self::Insert => "insert",
            Self::PassComplete => "pass-complete",
            Self::MergeComplete => "merge-complete",
            Self::PlacePivot => "place-pivot",
            Self::MarkSorted => "mark-sorted",
            Self::Visit => "visit",
            Self::CalculateMid => "calculate-mid",
            Self::EliminateLeft => "eliminate-left",
            Self::EliminateRight => "eliminate-right",
            Self::InsertKey => "insert-key",
            Self::Probe => "probe",
            Self::TableFull => "table-full",
            Self::SearchStart => "search-start",
            Self::Found => "found",
            Self::NotFound => "not-found",
            Self::Complete => "complete",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Steps and traces
// ============================================================================

/// One recorded moment of algorithm execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Classification tag for this step.
    pub kind: StepKind,
    /// Full data snapshot at this moment.
    pub state: Snapshot,
    /// Named index sets marking semantic roles.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub roles: RoleMap,
    /// Running operation totals.
    pub counters: Counters,
    /// Human-readable sentence for the transition that just occurred.
    pub description: String,
    /// True on exactly the terminal step(s) of the run.
    pub complete: bool,
}

impl Step {
    /// Create a non-terminal step with no roles.
    #[must_use]
    pub fn new(
        kind: StepKind,
        state: Snapshot,
        counters: Counters,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            state,
            roles: RoleMap::new(),
            counters,
            description: description.into(),
            complete: false,
        }
    }

    /// Attach a role index set (builder style).
    #[must_use]
    pub fn with_role<I: IntoIterator<Item = usize>>(mut self, role: Role, positions: I) -> Self {
        let set: BTreeSet<usize> = positions.into_iter().collect();
        if !set.is_empty() {
            self.roles.insert(role, set);
        }
        self
    }

    /// Mark this step terminal.
    #[must_use]
    pub fn finished(mut self) -> Self {
        self.complete = true;
        self
    }

    /// Positions carrying `role` at this step, if any.
    #[must_use]
    pub fn role(&self, role: Role) -> Option<&BTreeSet<usize>> {
        self.roles.get(&role)
    }
}

/// Ordered, finite sequence of steps produced by one generator run.
///
/// A trace for non-empty input is never empty: it opens with a
/// [`StepKind::Start`] step at zero counters and closes with a step whose
/// `complete` flag is set. Empty input yields an empty trace, which the
/// [`TraceStore`](crate::playback::TraceStore) refuses to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the trace holds no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// First step, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// Last step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl From<Vec<Step>> for Trace {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// ============================================================================
// Algorithm tags
// ============================================================================

/// Fixed identifier for each supported algorithm.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Bubble sort with early exit.
    BubbleSort,
    /// Selection sort (unstable by design).
    SelectionSort,
    /// Insertion sort.
    InsertionSort,
    /// Top-down merge sort.
    MergeSort,
    /// Quick sort with Lomuto partitioning, last-element pivot.
    QuickSort,
    /// Left-to-right linear search.
    LinearSearch,
    /// Binary search over an internally sorted working copy.
    BinarySearch,
    /// Hash-table construction replay plus search.
    HashSearch,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Self; 8] = [
        Self::BubbleSort,
        Self::SelectionSort,
        Self::InsertionSort,
        Self::MergeSort,
        Self::QuickSort,
        Self::LinearSearch,
        Self::BinarySearch,
        Self::HashSearch,
    ];

    /// Family this algorithm's traces belong to.
    ///
    /// The family is the context tag the store keeps alongside a loaded
    /// trace, so a stale trace from one family is never interpreted as
    /// another's.
    #[must_use]
    pub const fn family(self) -> AlgorithmFamily {
        match self {
            Self::BubbleSort
            | Self::SelectionSort
            | Self::InsertionSort
            | Self::MergeSort
            | Self::QuickSort => AlgorithmFamily::Sorting,
            Self::LinearSearch | Self::BinarySearch => AlgorithmFamily::Searching,
            Self::HashSearch => AlgorithmFamily::Hashing,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BubbleSort => "bubble-sort",
            Self::SelectionSort => "selection-sort",
            Self::InsertionSort => "insertion-sort",
            Self::MergeSort => "merge-sort",
            Self::QuickSort => "quick-sort",
            Self::LinearSearch => "linear-search",
            Self::BinarySearch => "binary-search",
            Self::HashSearch => "hash-search",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble-sort" => Ok(Self::BubbleSort),
            "selection-sort" => Ok(Self::SelectionSort),
            "insertion-sort" => Ok(Self::InsertionSort),
            "merge-sort" => Ok(Self::MergeSort),
            "quick-sort" => Ok(Self::QuickSort),
            "linear-search" => Ok(Self::LinearSearch),
            "binary-search" => Ok(Self::BinarySearch),
            "hash-search" => Ok(Self::HashSearch),
            other => Err(TraceError::config(format!("unknown algorithm: {other}"))),
        }
    }
}

/// Algorithm family, used as the store's context tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmFamily {
    /// Array sorting traces.
    Sorting,
    /// Array searching traces.
    Searching,
    /// Hash-table traces.
    Hashing,
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sorting => "sorting",
            Self::Searching => "searching",
            Self::Hashing => "hashing",
        };
        write!(f, "{name}")
    }
}
