//! Stage plans: the ordered content tables behind a tutorial module.
//!
//! A module is a linear walk over named stages. Instead of parallel arrays
//! (copy in one table, tool chips in another, all indexed by stage number
//! and free to drift), each stage is one record carrying everything it
//! needs:
//!
//! ```text
//!   StagePlan
//!   ├── Stage { key, title, next_label, content: Reading { .. } }
//!   ├── Stage { key, title, next_label, content: Interactive { tools, .. } }
//!   └── Stage { key, title, next_label, content: Reading { .. } }
//! ```
//!
//! Misaligned content is therefore unrepresentable, and the only failure
//! left is a malformed plan, caught once at construction.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A clickable tool chip shown next to an interactive visual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolChip {
    /// Stable key, also used for hint dismissal scoping.
    pub key: String,
    /// Display label.
    pub label: String,
}

impl ToolChip {
    /// Create a tool chip.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// What a stage displays. Each variant carries its own content, so a stage
/// can never point at another stage's tools or copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageContent {
    /// Explanatory copy only.
    Reading {
        /// Markdown-ish body text.
        body: String,
    },
    /// Copy paired with an interactive visual and its tool chips.
    Interactive {
        /// Markdown-ish body text.
        body: String,
        /// Tools the visual exposes (kernel picker, threshold slider, ...).
        tools: Vec<ToolChip>,
    },
}

/// One entry in a module's ordered stage sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stable key, unique within the plan.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Label for the button that advances past this stage.
    pub next_label: String,
    /// The stage's content.
    pub content: StageContent,
}

impl Stage {
    /// Create a text-only stage with the default "Next" button.
    pub fn reading(key: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            next_label: "Next".to_string(),
            content: StageContent::Reading { body: body.into() },
        }
    }

    /// Create an interactive stage with the default "Next" button.
    pub fn interactive(
        key: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        tools: Vec<ToolChip>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            next_label: "Next".to_string(),
            content: StageContent::Interactive {
                body: body.into(),
                tools,
            },
        }
    }

    /// Override the advance-button label.
    pub fn with_next_label(mut self, label: impl Into<String>) -> Self {
        self.next_label = label.into();
        self
    }

    /// Tool chips for this stage (empty for reading stages).
    pub fn tools(&self) -> &[ToolChip] {
        match &self.content {
            StageContent::Reading { .. } => &[],
            StageContent::Interactive { tools, .. } => tools,
        }
    }
}

/// A validated, ordered, fixed-length sequence of stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagePlan {
    stages: Vec<Stage>,
}

impl StagePlan {
    /// Validate and freeze a stage list.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyPlan`] for an empty list and
    /// [`CoreError::DuplicateStageKey`] when two stages share a key.
    pub fn new(stages: Vec<Stage>) -> Result<Self, CoreError> {
        if stages.is_empty() {
            return Err(CoreError::EmptyPlan);
        }
        for (i, stage) in stages.iter().enumerate() {
            if stages[..i].iter().any(|other| other.key == stage.key) {
                return Err(CoreError::DuplicateStageKey {
                    key: stage.key.clone(),
                });
            }
        }
        Ok(Self { stages })
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// A plan is never empty; kept for iterator-adjacent call sites.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Stage at a position.
    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Position of a stage key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.key == key)
    }

    /// Borrow all stages in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}
