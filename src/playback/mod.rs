//! Trace store and playback controller.
//!
//! A [`TraceStore`] holds the active trace, the algorithm that produced it
//! (the context tag that keeps a stale sorting trace from being rendered as
//! a search trace), and the current playback index. It is a two-state
//! machine, Empty and Loaded: loading rejects empty traces, navigation
//! saturates at both ends, and clearing happens atomically with an
//! algorithm switch — there is no observable "new selector, old trace"
//! state because the caller swaps via a single [`TraceStore::reload`] or
//! [`TraceStore::clear`] call.

use crate::error::{TraceError, TraceResult};
use crate::trace::{Algorithm, AlgorithmFamily, Step, Trace};

/// Playback state over the currently loaded trace.
#[derive(Debug, Default)]
pub struct TraceStore {
    loaded: Option<Loaded>,
}

#[derive(Debug)]
struct Loaded {
    trace: Trace,
    algorithm: Algorithm,
    current: usize,
}

impl TraceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a trace, replacing any previous one wholesale.
    ///
    /// The index starts at step 0.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::EmptyTrace`] if `trace` has no steps; the
    /// store is left unchanged in that case.
    pub fn load(&mut self, trace: Trace, algorithm: Algorithm) -> TraceResult<()> {
        if trace.is_empty() {
            return Err(TraceError::EmptyTrace);
        }
        self.loaded = Some(Loaded {
            trace,
            algorithm,
            current: 0,
        });
        Ok(())
    }

    /// Fresh-load semantics; alias for [`TraceStore::load`] at call sites
    /// that replace an existing trace.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::EmptyTrace`] if `trace` has no steps.
    pub fn reload(&mut self, trace: Trace, algorithm: Algorithm) -> TraceResult<()> {
        self.load(trace, algorithm)
    }

    /// Drop the loaded trace. Called whenever the active algorithm
    /// selection changes, so a stale trace is never shown under the new
    /// selector.
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    /// Move one step forward, saturating at the last step. No-op when
    /// already at the end or when empty.
    pub fn advance(&mut self) {
        if let Some(loaded) = &mut self.loaded {
            if loaded.current + 1 < loaded.trace.len() {
                loaded.current += 1;
            }
        }
    }

    /// Move one step backward, saturating at step 0. No-op at the start or
    /// when empty.
    pub fn retreat(&mut self) {
        if let Some(loaded) = &mut self.loaded {
            loaded.current = loaded.current.saturating_sub(1);
        }
    }

    /// Jump back to step 0.
    pub fn reset(&mut self) {
        if let Some(loaded) = &mut self.loaded {
            loaded.current = 0;
        }
    }

    /// The step currently selected, or `None` when the store is empty.
    /// Renderers must check before drawing.
    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        let loaded = self.loaded.as_ref()?;
        loaded.trace.get(loaded.current)
    }

    /// Current playback index, when loaded.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.loaded.as_ref().map(|l| l.current)
    }

    /// Number of steps in the loaded trace; 0 when empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loaded.as_ref().map_or(0, |l| l.trace.len())
    }

    /// True when no trace is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_none()
    }

    /// True when a trace is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Algorithm that produced the loaded trace.
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.loaded.as_ref().map(|l| l.algorithm)
    }

    /// Family context tag for the loaded trace.
    #[must_use]
    pub fn family(&self) -> Option<AlgorithmFamily> {
        self.algorithm().map(Algorithm::family)
    }

    /// True when loaded and positioned on step 0.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.current_index() == Some(0)
    }

    /// True when loaded and positioned on the last step.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|l| l.current + 1 == l.trace.len())
    }
}
