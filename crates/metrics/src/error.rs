//! Error types for classification operations.

use thiserror::Error;

/// Errors that can occur while classifying a population.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// Classification attempted on zero records.
    #[error("population cannot be empty")]
    EmptyPopulation,
}
