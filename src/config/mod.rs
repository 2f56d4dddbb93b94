//! Run configuration with YAML schema and validation.
//!
//! A [`RunConfig`] names the algorithm to trace, the input values, and —
//! for the search family — the target and hash-table layout. This is the
//! whole configuration surface the core exposes: navigation UI forwards a
//! fixed algorithm identifier plus the input, nothing else.
//!
//! ```yaml
//! algorithm: hash-search
//! values: [15, 25, 35, 10, 33, 12]
//! target: 12
//! hash:
//!   table_size: 7
//!   method: division
//!   policy: chaining
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{TraceError, TraceResult};
use crate::searching::hash::HashLayout;
use crate::searching::{binary, hash, linear};
use crate::sorting::{bubble, insertion, merge, quick, selection};
use crate::trace::{Algorithm, AlgorithmFamily, Trace};

/// Complete description of one trace-generation run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Which generator to invoke.
    pub algorithm: Algorithm,

    /// Input values (array to sort or search, or hash keys to insert).
    /// May be empty, in which case the run produces an empty trace and the
    /// caller no-ops.
    #[validate(length(max = 64))]
    #[serde(default)]
    pub values: Vec<i64>,

    /// Search target. Required for the search algorithms, ignored by the
    /// sorts.
    #[serde(default)]
    pub target: Option<i64>,

    /// Hash-table layout. Only consulted by hash search.
    #[serde(default)]
    pub hash: HashLayout,
}

impl RunConfig {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> TraceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TraceResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for programmatic construction.
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a search algorithm has no target
    /// or the hash layout has no buckets.
    pub fn validate_semantic(&self) -> TraceResult<()> {
        let needs_target = matches!(
            self.algorithm.family(),
            AlgorithmFamily::Searching | AlgorithmFamily::Hashing
        );
        if needs_target && self.target.is_none() {
            return Err(TraceError::config(format!(
                "{} requires a target value",
                self.algorithm
            )));
        }

        if self.algorithm == Algorithm::HashSearch && self.hash.table_size == 0 {
            return Err(TraceError::config("hash table size must be at least 1"));
        }

        Ok(())
    }

    /// Run the configured generator and return its trace.
    ///
    /// Empty input yields an empty trace; callers must check before loading
    /// the result into a [`TraceStore`](crate::playback::TraceStore).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a search algorithm is missing its
    /// target (for configs built without going through validation).
    pub fn run(&self) -> TraceResult<Trace> {
        let trace = match self.algorithm {
            Algorithm::BubbleSort => bubble::generate(&self.values),
            Algorithm::SelectionSort => selection::generate(&self.values),
            Algorithm::InsertionSort => insertion::generate(&self.values),
            Algorithm::MergeSort => merge::generate(&self.values),
            Algorithm::QuickSort => quick::generate(&self.values),
            Algorithm::LinearSearch => linear::generate(&self.values, self.target_value()?),
            Algorithm::BinarySearch => binary::generate(&self.values, self.target_value()?),
            Algorithm::HashSearch => {
                hash::generate(&self.values, self.target_value()?, &self.hash)
            }
        };
        Ok(trace)
    }

    fn target_value(&self) -> TraceResult<i64> {
        self.target
            .ok_or_else(|| TraceError::config(format!("{} requires a target value", self.algorithm)))
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    algorithm: Option<Algorithm>,
    values: Vec<i64>,
    target: Option<i64>,
    hash: Option<HashLayout>,
}

impl RunConfigBuilder {
    /// Set the algorithm to trace.
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the input values.
    #[must_use]
    pub fn values(mut self, values: impl Into<Vec<i64>>) -> Self {
        self.values = values.into();
        self
    }

    /// Set the search target.
    #[must_use]
    pub fn target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the hash-table layout.
    #[must_use]
    pub fn hash(mut self, hash: HashLayout) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Build the configuration. Defaults: bubble sort, no values, no
    /// target, default hash layout.
    #[must_use]
    pub fn build(self) -> RunConfig {
        RunConfig {
            algorithm: self.algorithm.unwrap_or(Algorithm::BubbleSort),
            values: self.values,
            target: self.target,
            hash: self.hash.unwrap_or_default(),
        }
    }
}
