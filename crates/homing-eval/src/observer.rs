//! Optional instrumentation for the sequential fold.
//!
//! Intermediate state is never printed by the fold itself. Callers that
//! want it pass a [`DisplacementObserver`]; [`TracingObserver`] forwards
//! every step to `tracing`.

use homing_core::{Directive, Displacement};

/// Receives the intermediate state of a sequential fold.
///
/// All methods default to doing nothing.
pub trait DisplacementObserver {
    /// A directive at `index` was applied; `running` is the displacement
    /// after applying it.
    fn on_directive(&mut self, index: usize, directive: Directive, running: Displacement) {
        let _ = (index, directive, running);
    }

    /// The character at `index` was skipped under the lenient policy.
    fn on_ignored(&mut self, index: usize, character: char) {
        let _ = (index, character);
    }

    /// The fold finished without error.
    fn on_complete(&mut self, total: Displacement, at_origin: bool) {
        let _ = (total, at_origin);
    }
}

/// Observer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DisplacementObserver for NoopObserver {}

/// Observer that emits `tracing` events.
///
/// Per-character events are logged at `TRACE`; the final result at `DEBUG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DisplacementObserver for TracingObserver {
    fn on_directive(&mut self, index: usize, directive: Directive, running: Displacement) {
        tracing::trace!(index, %directive, x = running.x, y = running.y, "applied directive");
    }

    fn on_ignored(&mut self, index: usize, character: char) {
        tracing::trace!(index, ?character, "ignored unknown character");
    }

    fn on_complete(&mut self, total: Displacement, at_origin: bool) {
        tracing::debug!(x = total.x, y = total.y, at_origin, "evaluation complete");
    }
}
