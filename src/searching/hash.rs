//! Hash search trace generator.
//!
//! The trace has two phases: every key's insertion is replayed as its own
//! step(s), then the lookup runs against the finished table. Counters
//! increment once per probe or comparison.
//!
//! Linear probing carries a wrap-around termination guard on both insertion
//! and search: a probe sequence that returns to its starting bucket stops
//! with a table-full step (insertion skips the key) or a not-found step
//! (search) instead of looping.

use serde::{Deserialize, Serialize};

use crate::trace::{Bucket, Counters, Role, Snapshot, Step, StepKind, Trace};

/// Knuth's multiplication-method constant, (sqrt(5) - 1) / 2.
fn knuth_a() -> f64 {
    (5.0_f64.sqrt() - 1.0) / 2.0
}

/// Hash function selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashMethod {
    /// `key mod size`.
    #[default]
    Division,
    /// `floor(size * frac(key * A))` with `A = (sqrt(5) - 1) / 2`.
    Multiplication,
}

impl std::fmt::Display for HashMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Division => write!(f, "division"),
            Self::Multiplication => write!(f, "multiplication"),
        }
    }
}

/// Collision resolution selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Buckets are growable chains; insertion appends.
    #[default]
    Chaining,
    /// Buckets hold at most one key; insertion and search probe
    /// `(hash + p) mod size` for increasing `p`.
    LinearProbing,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chaining => write!(f, "chaining"),
            Self::LinearProbing => write!(f, "linear probing"),
        }
    }
}

/// Hash table shape: size, hash method, and collision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLayout {
    /// Number of buckets. Must be at least 1.
    pub table_size: usize,
    /// Hash function.
    #[serde(default)]
    pub method: HashMethod,
    /// Collision resolution.
    #[serde(default)]
    pub policy: CollisionPolicy,
}

impl Default for HashLayout {
    fn default() -> Self {
        Self {
            table_size: 7,
            method: HashMethod::default(),
            policy: CollisionPolicy::default(),
        }
    }
}

impl HashLayout {
    /// Bucket index for `key`. Always in `0..table_size`.
    #[must_use]
    pub fn bucket_for(&self, key: i64) -> usize {
        match self.method {
            HashMethod::Division => key.rem_euclid(self.table_size as i64) as usize,
            HashMethod::Multiplication => {
                let fractional = (key as f64 * knuth_a()).rem_euclid(1.0);
                let index = (self.table_size as f64 * fractional) as usize;
                // Floating-point edge: frac can round up to 1.0.
                index.min(self.table_size - 1)
            }
        }
    }
}

/// Working hash table, one variant per collision policy.
enum Table {
    Chains(Vec<Vec<i64>>),
    Slots(Vec<Option<i64>>),
}

impl Table {
    fn new(layout: &HashLayout) -> Self {
        match layout.policy {
            CollisionPolicy::Chaining => Self::Chains(vec![Vec::new(); layout.table_size]),
            CollisionPolicy::LinearProbing => Self::Slots(vec![None; layout.table_size]),
        }
    }

    fn snapshot(&self) -> Snapshot {
        match self {
            Self::Chains(chains) => chains_snapshot(chains),
            Self::Slots(slots) => slots_snapshot(slots),
        }
    }
}

fn chains_snapshot(chains: &[Vec<i64>]) -> Snapshot {
    Snapshot::Buckets(chains.iter().map(|c| Bucket::Chain(c.clone())).collect())
}

fn slots_snapshot(slots: &[Option<i64>]) -> Snapshot {
    Snapshot::Buckets(slots.iter().map(|s| Bucket::Slot(*s)).collect())
}

/// Generate a hash search trace: insert every key, then look up `target`.
#[must_use]
pub fn generate(keys: &[i64], target: i64, layout: &HashLayout) -> Trace {
    if keys.is_empty() || layout.table_size == 0 {
        return Trace::new();
    }

    let mut table = Table::new(layout);
    let mut trace = Trace::new();
    let mut counters = Counters::ZERO;

    trace.push(Step::new(
        StepKind::Start,
        table.snapshot(),
        counters,
        format!(
            "Building a {}-bucket table ({} hashing, {}) from {} keys",
            layout.table_size,
            layout.method,
            layout.policy,
            keys.len()
        ),
    ));

    for &key in keys {
        insert(&mut table, &mut trace, &mut counters, layout, key);
    }

    search(&table, &mut trace, &mut counters, layout, target);
    trace
}

fn insert(
    table: &mut Table,
    trace: &mut Trace,
    counters: &mut Counters,
    layout: &HashLayout,
    key: i64,
) {
    let home = layout.bucket_for(key);

    match table {
        Table::Chains(chains) => {
            counters.probes += 1;
            chains[home].push(key);
            let position = chains[home].len() - 1;
            trace.push(
                Step::new(
                    StepKind::InsertKey,
                    chains_snapshot(chains),
                    *counters,
                    format!("Inserted {key} into bucket {home} at chain position {position}"),
                )
                .with_role(Role::Probing, [home]),
            );
        }
        Table::Slots(slots) => {
            for offset in 0..layout.table_size {
                let index = (home + offset) % layout.table_size;
                counters.probes += 1;

                if slots[index].is_none() {
                    slots[index] = Some(key);
                    trace.push(
                        Step::new(
                            StepKind::InsertKey,
                            slots_snapshot(slots),
                            *counters,
                            if offset == 0 {
                                format!("Inserted {key} into its home bucket {index}")
                            } else {
                                format!(
                                    "Inserted {key} into bucket {index} after {offset} occupied probes from bucket {home}"
                                )
                            },
                        )
                        .with_role(Role::Probing, [index]),
                    );
                    return;
                }

                trace.push(
                    Step::new(
                        StepKind::Probe,
                        slots_snapshot(slots),
                        *counters,
                        format!("Bucket {index} is occupied; probing the next bucket for {key}"),
                    )
                    .with_role(Role::Probing, [index]),
                );
            }

            // Probe sequence wrapped back to the home bucket: table full.
            trace.push(
                Step::new(
                    StepKind::TableFull,
                    slots_snapshot(slots),
                    *counters,
                    format!("Table is full; {key} was not inserted"),
                )
                .with_role(Role::Probing, [home]),
            );
        }
    }
}

fn search(
    table: &Table,
    trace: &mut Trace,
    counters: &mut Counters,
    layout: &HashLayout,
    target: i64,
) {
    let home = layout.bucket_for(target);

    trace.push(
        Step::new(
            StepKind::SearchStart,
            table.snapshot(),
            *counters,
            format!("Searching for {target}, which hashes to bucket {home}"),
        )
        .with_role(Role::Probing, [home]),
    );

    match table {
        Table::Chains(chains) => {
            for (position, &key) in chains[home].iter().enumerate() {
                counters.comparisons += 1;
                trace.push(
                    Step::new(
                        StepKind::Probe,
                        table.snapshot(),
                        *counters,
                        format!("Comparing {target} with {key} at chain position {position}"),
                    )
                    .with_role(Role::Probing, [home]),
                );

                if key == target {
                    trace.push(
                        Step::new(
                            StepKind::Found,
                            table.snapshot(),
                            *counters,
                            format!(
                                "Found {target} in bucket {home} at chain position {position}"
                            ),
                        )
                        .with_role(Role::Found, [home])
                        .finished(),
                    );
                    return;
                }
            }

            trace.push(
                Step::new(
                    StepKind::NotFound,
                    table.snapshot(),
                    *counters,
                    format!("{target} is not in bucket {home}"),
                )
                .finished(),
            );
        }
        Table::Slots(slots) => {
            for offset in 0..layout.table_size {
                let index = (home + offset) % layout.table_size;
                counters.probes += 1;

                match slots[index] {
                    Some(key) if key == target => {
                        trace.push(
                            Step::new(
                                StepKind::Found,
                                table.snapshot(),
                                *counters,
                                format!(
                                    "Found {target} in bucket {index} after {} probes",
                                    offset + 1
                                ),
                            )
                            .with_role(Role::Found, [index])
                            .finished(),
                        );
                        return;
                    }
                    Some(key) => {
                        trace.push(
                            Step::new(
                                StepKind::Probe,
                                table.snapshot(),
                                *counters,
                                format!("Bucket {index} holds {key}, not {target}; probing on"),
                            )
                            .with_role(Role::Probing, [index]),
                        );
                    }
                    None => {
                        trace.push(
                            Step::new(
                                StepKind::NotFound,
                                table.snapshot(),
                                *counters,
                                format!("Bucket {index} is empty; {target} is not in the table"),
                            )
                            .with_role(Role::Probing, [index])
                            .finished(),
                        );
                        return;
                    }
                }
            }

            // Wrapped back to the home bucket without an empty slot or match.
            trace.push(
                Step::new(
                    StepKind::NotFound,
                    table.snapshot(),
                    *counters,
                    format!(
                        "Probe sequence returned to bucket {home}; {target} is not in the table"
                    ),
                )
                .finished(),
            );
        }
    }
}
