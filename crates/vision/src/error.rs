//! Error types for image and filter operations.

use thiserror::Error;

/// Errors that can occur while building grids or running the filter pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisionError {
    /// Grid rows have unequal lengths.
    #[error("grid has ragged rows: row {row} has {got} cells (expected {expected})")]
    InvalidDimensions {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Grid has no rows or no columns.
    #[error("grid cannot be empty")]
    EmptyGrid,

    /// Kernel is not a square, odd-sided matrix of side >= 3.
    #[error("kernel side {side} is invalid (must be square, odd, and at least 3)")]
    InvalidKernelSize { side: usize },

    /// Kernel footprint does not fit inside the grid.
    #[error("kernel side {kernel} exceeds grid dimensions {rows}x{cols}")]
    KernelTooLarge {
        kernel: usize,
        rows: usize,
        cols: usize,
    },

    /// Pooling needs at least one full 2x2 block.
    #[error("pooling needs at least a 2x2 grid, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize },
}
