//! # algotrace
//!
//! Step-trace engine for classic algorithm visualization.
//!
//! The crate has two halves:
//! - **Trace generators**: pure functions that run an algorithm (linear,
//!   binary, or hash search; bubble, selection, insertion, merge, or quick
//!   sort) to completion while recording every comparison, swap, shift, and
//!   probe as a discrete [`Step`](trace::Step) in a [`Trace`](trace::Trace).
//! - **Playback**: a [`TraceStore`](playback::TraceStore) that holds one
//!   trace at a time and steps through it forward and backward on demand.
//!
//! Generation is eager and synchronous: the whole trace exists before
//! playback begins. Rendering is a consumer concern; every step carries a
//! full state snapshot, named role indices, running counters, and a
//! human-readable description, so a renderer is a pure function of the
//! current step.
//!
//! ## Example
//!
//! ```rust
//! use algotrace::prelude::*;
//!
//! let trace = algotrace::sorting::bubble::generate(&[5, 3, 1]);
//! let mut store = TraceStore::new();
//! store.load(trace, Algorithm::BubbleSort).unwrap();
//!
//! while !store.at_end() {
//!     store.advance();
//! }
//! assert!(store.current_step().unwrap().complete);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Index loops are clearer when emitting index-based steps
    clippy::too_many_lines,
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod playback;
pub mod searching;
pub mod sorting;
pub mod trace;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{RunConfig, RunConfigBuilder};
    pub use crate::error::{TraceError, TraceResult};
    pub use crate::playback::TraceStore;
    pub use crate::searching::hash::{CollisionPolicy, HashLayout, HashMethod};
    pub use crate::trace::{
        Algorithm, AlgorithmFamily, Counters, Role, Snapshot, Step, StepKind, Trace,
    };
}
