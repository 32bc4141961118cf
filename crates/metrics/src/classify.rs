//! The classification engine: threshold a population into confusion cells.
//!
//! Given a population and a decision threshold, every record lands in
//! exactly one of the four confusion-matrix categories:
//!
//! ```text
//!                      flagged          not flagged
//!                 ┌───────────────┬───────────────────┐
//!   actual spam   │ true positive │  false negative   │
//!                 ├───────────────┼───────────────────┤
//!   actual legit  │ false positive│  true negative    │
//!                 └───────────────┴───────────────────┘
//! ```
//!
//! Classification is a pure function of (population, threshold):
//! recomputing always reproduces identical outcomes and counts.

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::record::EmailRecord;

/// The four mutually exclusive confusion-matrix categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    TruePositive,
    FalsePositive,
    TrueNegative,
    FalseNegative,
}

impl Category {
    /// Cross ground truth against the flagged decision.
    pub fn of(is_spam: bool, flagged: bool) -> Self {
        match (is_spam, flagged) {
            (true, true) => Category::TruePositive,
            (true, false) => Category::FalseNegative,
            (false, true) => Category::FalsePositive,
            (false, false) => Category::TrueNegative,
        }
    }
}

/// The per-record decision and category for one classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Which record this outcome belongs to.
    pub id: u32,
    /// Was the record's confidence at or above the threshold?
    pub flagged: bool,
    /// The confusion cell the record landed in.
    pub category: Category,
}

/// Cardinalities of the four confusion cells.
///
/// Invariant: the four counts always sum to the population size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl Counts {
    /// Total records across all four cells.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::TruePositive => self.true_positives += 1,
            Category::FalsePositive => self.false_positives += 1,
            Category::TrueNegative => self.true_negatives += 1,
            Category::FalseNegative => self.false_negatives += 1,
        }
    }
}

/// The result of classifying a population at one threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The threshold the run used.
    pub threshold: u8,
    /// One outcome per record, in population order.
    pub outcomes: Vec<Outcome>,
    /// Aggregate confusion-matrix counts.
    pub counts: Counts,
}

/// Classify every record against a decision threshold.
///
/// A record is flagged when `confidence >= threshold`. The comparison is
/// inclusive, so a confidence exactly equal to the threshold counts as
/// flagged.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyPopulation`] for zero records.
///
/// # Example
///
/// ```rust
/// use tutorlab_metrics::{classify, EmailRecord};
///
/// let population = vec![
///     EmailRecord::new(0, true, 90),
///     EmailRecord::new(1, true, 40),
///     EmailRecord::new(2, false, 60),
/// ];
/// let run = classify(&population, 50).unwrap();
/// assert_eq!(run.counts.true_positives, 1);
/// assert_eq!(run.counts.false_negatives, 1);
/// assert_eq!(run.counts.false_positives, 1);
/// assert_eq!(run.counts.true_negatives, 0);
/// ```
pub fn classify(records: &[EmailRecord], threshold: u8) -> Result<Classification, MetricsError> {
    if records.is_empty() {
        return Err(MetricsError::EmptyPopulation);
    }

    let mut counts = Counts::default();
    let mut outcomes = Vec::with_capacity(records.len());

    for record in records {
        debug_assert!(record.confidence <= 100);
        let flagged = record.confidence >= threshold;
        let category = Category::of(record.is_spam, flagged);
        counts.bump(category);
        outcomes.push(Outcome {
            id: record.id,
            flagged,
            category,
        });
    }

    Ok(Classification {
        threshold,
        outcomes,
        counts,
    })
}
