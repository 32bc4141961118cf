//! Dismissed-hint tracking for one module session.
//!
//! Hints ("try the edge-detect kernel", "drag the threshold") pop up next
//! to tools until the learner dismisses them. The dismissal set is plain
//! owned state scoped to a single module session: it travels with the
//! module context rather than living in shared global state, and resets
//! with the module.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which hints the learner has dismissed this session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    dismissed: BTreeSet<String>,
}

impl HintSet {
    /// Create an empty set (no hints dismissed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss a hint. Returns `true` the first time, `false` when the
    /// hint was already dismissed.
    pub fn dismiss(&mut self, key: impl Into<String>) -> bool {
        self.dismissed.insert(key.into())
    }

    /// Has this hint been dismissed?
    pub fn is_dismissed(&self, key: &str) -> bool {
        self.dismissed.contains(key)
    }

    /// Number of dismissed hints.
    pub fn len(&self) -> usize {
        self.dismissed.len()
    }

    /// True when no hint has been dismissed yet.
    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty()
    }

    /// Forget every dismissal (used by module restart).
    pub fn reset(&mut self) {
        self.dismissed.clear();
    }
}
