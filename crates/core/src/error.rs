//! Error types for stage-plan construction.
//!
//! Misassembled content tables are construction-time errors, not runtime
//! surprises: a plan either validates once when the module is built, or the
//! module never exists. Navigation itself is infallible; see `sequencer`.

use thiserror::Error;

/// Errors that can occur while assembling a tutorial module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A stage plan must hold at least one stage.
    #[error("stage plan cannot be empty")]
    EmptyPlan,

    /// Stage keys must be unique within a plan.
    #[error("duplicate stage key {key:?}")]
    DuplicateStageKey { key: String },
}
