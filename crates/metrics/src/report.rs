//! Derived metrics over confusion-matrix counts.
//!
//! Each metric is a small pure function of [`Counts`]. Zero-denominator
//! cases are not errors: they return `0.0`, because the walkthrough must
//! always have a number to render. The choice is documented per function.

use serde::{Deserialize, Serialize};

use crate::classify::Counts;

/// Fraction of flagged emails that really were spam: `tp / (tp + fp)`.
///
/// Returns `0.0` when nothing was flagged (`tp + fp == 0`).
pub fn precision(counts: &Counts) -> f64 {
    let flagged = counts.true_positives + counts.false_positives;
    if flagged == 0 {
        return 0.0;
    }
    counts.true_positives as f64 / flagged as f64
}

/// Fraction of actual spam that was caught: `tp / (tp + fn)`.
///
/// Returns `0.0` when the population holds no positives (`tp + fn == 0`).
pub fn recall(counts: &Counts) -> f64 {
    let positives = counts.true_positives + counts.false_negatives;
    if positives == 0 {
        return 0.0;
    }
    counts.true_positives as f64 / positives as f64
}

/// Harmonic mean of precision and recall.
///
/// Returns `0.0` when both are zero.
pub fn f1(counts: &Counts) -> f64 {
    let p = precision(counts);
    let r = recall(counts);
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}

/// Fraction of all decisions that were correct: `(tp + tn) / total`.
///
/// Returns `0.0` for an empty count set.
pub fn accuracy(counts: &Counts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    (counts.true_positives + counts.true_negatives) as f64 / total as f64
}

/// All four derived metrics for one classification run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

impl MetricReport {
    /// Derive every metric from one set of counts.
    pub fn from_counts(counts: &Counts) -> Self {
        Self {
            precision: precision(counts),
            recall: recall(counts),
            f1: f1(counts),
            accuracy: accuracy(counts),
        }
    }
}
