//! # Core - TutorLab Module Foundations
//!
//! This crate provides the shared machinery every tutorial module runs on:
//!
//! - **Stages**: validated, ordered content tables (one tagged record per
//!   stage, no parallel arrays)
//! - **Sequencer**: the explicit progress state machine with watermark
//!   gating and the quiz sub-mode
//! - **Store**: the one-integer-per-module progress persistence seam
//! - **Hints**: per-session dismissed-hint tracking
//! - **Schedule**: cancellable step sequences for staged animations
//!
//! ## Design Philosophy
//!
//! A module's UI state is a handful of co-varying values (current stage,
//! furthest stage, quiz open, pending animations). Instead of scattering
//! them across components and reconciling with effects, this crate keeps
//! each concern in one owned value with a single authoritative transition
//! set, and keeps every numeric engine out so the machinery is reusable by
//! any walkthrough.

pub mod error;
pub mod hints;
pub mod schedule;
pub mod sequencer;
pub mod stage;
pub mod store;

// Re-export key types at crate root for convenience
pub use error::CoreError;
pub use hints::HintSet;
pub use schedule::{Animator, StepSequence};
pub use sequencer::{ModuleProgress, ModuleState, NoopHook, ProgressHook};
pub use stage::{Stage, StageContent, StagePlan, ToolChip};
pub use store::{MemoryStore, ProgressStore};
