//! Precision-recall curves via threshold sweeps.
//!
//! A curve is nothing more than the single-point classification repeated at
//! each threshold. There is deliberately no separate curve algorithm: the
//! walkthrough renders the curve and a draggable single-point readout side
//! by side, and the two must never disagree.

use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::MetricsError;
use crate::record::EmailRecord;
use crate::report::{precision, recall};

/// One point on a precision-recall curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub threshold: u8,
    pub precision: f64,
    pub recall: f64,
}

/// Classify the population once per threshold and collect curve points.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyPopulation`] for zero records.
pub fn sweep(
    records: &[EmailRecord],
    thresholds: impl IntoIterator<Item = u8>,
) -> Result<Vec<CurvePoint>, MetricsError> {
    thresholds
        .into_iter()
        .map(|threshold| {
            let run = classify(records, threshold)?;
            Ok(CurvePoint {
                threshold,
                precision: precision(&run.counts),
                recall: recall(&run.counts),
            })
        })
        .collect()
}

/// Sweep the entire threshold range 0..=100.
pub fn full_sweep(records: &[EmailRecord]) -> Result<Vec<CurvePoint>, MetricsError> {
    sweep(records, 0..=100)
}
