//! Cancellable step sequences for staged animations.
//!
//! The visuals reveal themselves in timed steps: grid cells fading in one
//! by one, a window scanning across a grid, demo playback auto-advancing.
//! Scheduling those steps as loose timer chains invites the classic bug
//! where a stale timer fires after the learner has moved on.
//!
//! This module replaces timer chains with one owned handle per visual:
//!
//! - [`StepSequence`] describes the timing of a run of steps.
//! - [`Animator`] plays at most one sequence; playing a new one first
//!   cancels whatever was pending, and [`Animator::cancel`] is idempotent
//!   (cancelling a finished or already-cancelled sequence is a no-op).
//!
//! Steps are delivered to a callback with the step index; the callback
//! owns whatever display state the steps drive.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// The timing of an animation: one delay before each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    delays: Vec<Duration>,
}

impl StepSequence {
    /// A sequence with an explicit delay before each step.
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// `steps` steps, each preceded by the same delay.
    pub fn uniform(steps: usize, delay: Duration) -> Self {
        Self {
            delays: vec![delay; steps],
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    /// True for a zero-step sequence.
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}

/// Owner of at most one in-flight step sequence.
///
/// Dropping the animator cancels whatever is pending, so a visual that
/// goes away takes its timers with it.
#[derive(Debug, Default)]
pub struct Animator {
    current: Option<JoinHandle<()>>,
}

impl Animator {
    /// Create an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing a sequence, cancelling any pending one first.
    ///
    /// `on_step` is invoked with the step index (0-based) after each
    /// step's delay elapses. Must be called within a tokio runtime.
    pub fn play<F>(&mut self, sequence: StepSequence, mut on_step: F)
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.cancel();
        debug!(steps = sequence.len(), "animation scheduled");
        self.current = Some(tokio::spawn(async move {
            for (index, delay) in sequence.delays.into_iter().enumerate() {
                tokio::time::sleep(delay).await;
                on_step(index);
            }
        }));
    }

    /// Cancel the pending sequence, if any. Idempotent: cancelling an
    /// already-finished or already-cancelled sequence does nothing.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
            debug!("animation cancelled");
        }
    }

    /// True when no sequence is pending (never played, finished, or
    /// cancelled).
    pub fn is_idle(&self) -> bool {
        match &self.current {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.cancel();
    }
}
