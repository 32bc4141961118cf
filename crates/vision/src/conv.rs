//! The convolution engine: sliding a kernel across a grid.
//!
//! This is the ML-convention "convolution": an unflipped
//! multiply-accumulate (cross-correlation), not the signal-processing
//! definition with a mirrored kernel:
//!
//! ```text
//!   out[r][c] = Σᵢ Σⱼ  in[r+i][c+j] · kernel[i][j]
//! ```
//!
//! Windows are valid-only: there is no padding mode, so positions where the
//! kernel would overhang the grid are simply not computed and the output
//! shrinks by `side - 1` in each dimension.

use serde::Serialize;

use crate::error::VisionError;
use crate::image::validate_rows;
use crate::kernel::Kernel;

/// A rectangular grid of filter responses.
///
/// Values keep full `f64` precision; rounding happens only at display
/// time via [`FeatureMap::rounded`], so downstream pooling sees exact sums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMap {
    rows: Vec<Vec<f64>>,
}

impl FeatureMap {
    /// Create a feature map from rows of values.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::EmptyGrid`] or
    /// [`VisionError::InvalidDimensions`] for malformed input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, VisionError> {
        validate_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Build from rows already known to be rectangular.
    pub(crate) fn from_rect(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(validate_rows(&rows).is_ok());
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Borrow the raw rows.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Display-time rounding: every value via `f64::round` (half away from
    /// zero, for negatives too: `-0.5` rounds to `-1`).
    ///
    /// The stored map is never mutated; renderers call this per paint.
    pub fn rounded(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|v| v.round() as i64).collect())
            .collect()
    }
}

/// Convolve a grid with a kernel over every valid window position.
///
/// For an `R x C` input and a `k x k` kernel the output is
/// `(R-k+1) x (C-k+1)`. Stride is 1 and there is no bias or activation:
/// each output cell is the plain multiply-accumulate over one window.
///
/// # Errors
///
/// Returns [`VisionError::KernelTooLarge`] when the kernel side exceeds
/// either input dimension.
///
/// # Example
///
/// ```rust
/// use tutorlab_vision::{convolve, FeatureMap, Kernel};
///
/// let grid = FeatureMap::new(vec![vec![1.0; 4]; 4]).unwrap();
/// let out = convolve(&grid, &Kernel::blur()).unwrap();
/// assert_eq!(out.height(), 2);
/// assert_eq!(out.width(), 2);
/// // Nine cells of 1.0 against uniform 1/9 sums to 1.0.
/// assert!((out.get(0, 0) - 1.0).abs() < 1e-12);
/// ```
pub fn convolve(input: &FeatureMap, kernel: &Kernel) -> Result<FeatureMap, VisionError> {
    let side = kernel.side();
    let (rows, cols) = (input.height(), input.width());
    if side > rows || side > cols {
        return Err(VisionError::KernelTooLarge {
            kernel: side,
            rows,
            cols,
        });
    }

    let out_rows = rows - side + 1;
    let out_cols = cols - side + 1;
    let mut out = vec![vec![0.0; out_cols]; out_rows];

    for (r, out_row) in out.iter_mut().enumerate() {
        for (c, cell) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for i in 0..side {
                for j in 0..side {
                    acc += input.get(r + i, c + j) * kernel.get(i, j);
                }
            }
            *cell = acc;
        }
    }

    Ok(FeatureMap::from_rect(out))
}
