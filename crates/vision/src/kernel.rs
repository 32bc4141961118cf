//! Convolution kernels: small square weight matrices.
//!
//! A kernel is multiplied-and-summed against each local window of an input
//! grid. The weights carry no constraints beyond shape: zero-sum edge
//! detectors and positive-sum blurs are equally valid.

use serde::Serialize;

use crate::error::VisionError;
use crate::image::validate_rows;

/// UI bound for custom kernel cells.
pub const CUSTOM_WEIGHT_LIMIT: f64 = 9.0;

/// A square, odd-sided matrix of filter weights.
///
/// # Example
///
/// ```rust
/// use tutorlab_vision::Kernel;
///
/// let identity = Kernel::new(vec![
///     vec![0.0, 0.0, 0.0],
///     vec![0.0, 1.0, 0.0],
///     vec![0.0, 0.0, 0.0],
/// ]).unwrap();
/// assert_eq!(identity.side(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kernel {
    weights: Vec<Vec<f64>>,
    side: usize,
}

impl Kernel {
    /// Create a kernel from rows of weights.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::InvalidDimensions`] for ragged rows and
    /// [`VisionError::InvalidKernelSize`] when the matrix is not square,
    /// not odd-sided, or smaller than 3x3.
    pub fn new(weights: Vec<Vec<f64>>) -> Result<Self, VisionError> {
        let (rows, cols) = validate_rows(&weights)?;
        if rows != cols || rows < 3 || rows % 2 == 0 {
            return Err(VisionError::InvalidKernelSize { side: rows });
        }
        Ok(Self {
            weights,
            side: rows,
        })
    }

    /// Create a 3x3 kernel from fixed cells. Infallible: the shape is
    /// correct by construction.
    pub fn custom3(cells: [[f64; 3]; 3]) -> Self {
        Self {
            weights: cells.iter().map(|row| row.to_vec()).collect(),
            side: 3,
        }
    }

    /// Side length of the square matrix.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Weight at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.weights[row][col]
    }

    /// Borrow the raw weight rows.
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    // ------------------------------------------------------------------
    // Built-in filters
    //
    // These are the five filters the tutorial ships with. The exact values
    // matter: rendered feature maps are compared against recorded runs.
    // ------------------------------------------------------------------

    /// All-direction edge detector (zero-sum).
    pub fn edge_detect() -> Self {
        Self::custom3([[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]])
    }

    /// Uniform box blur: 1/9 in every cell.
    pub fn blur() -> Self {
        let w = 1.0 / 9.0;
        Self::custom3([[w, w, w], [w, w, w], [w, w, w]])
    }

    /// Sharpen: centre boost with 4-neighbour suppression.
    pub fn sharpen() -> Self {
        Self::custom3([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]])
    }

    /// Horizontal edge detector: top row negative, bottom row positive.
    pub fn horizontal_edge() -> Self {
        Self::custom3([[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
    }

    /// Vertical edge detector: left column negative, right column positive.
    pub fn vertical_edge() -> Self {
        Self::custom3([[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]])
    }
}

/// Clamp a custom-kernel cell to the UI's [-9, 9] range.
///
/// The convolution engine accepts any weights; this helper exists so that
/// hosts building custom-kernel editors agree on the bound.
pub fn clamp_weight(weight: f64) -> f64 {
    weight.clamp(-CUSTOM_WEIGHT_LIMIT, CUSTOM_WEIGHT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_new_valid() {
        let k = Kernel::new(vec![vec![1.0; 3]; 3]).unwrap();
        assert_eq!(k.side(), 3);
        assert_eq!(k.get(1, 1), 1.0);
    }

    #[test]
    fn test_kernel_rejects_even_side() {
        let result = Kernel::new(vec![vec![1.0; 4]; 4]);
        assert_eq!(result, Err(VisionError::InvalidKernelSize { side: 4 }));
    }

    #[test]
    fn test_kernel_rejects_non_square() {
        let result = Kernel::new(vec![vec![1.0; 5]; 3]);
        assert_eq!(result, Err(VisionError::InvalidKernelSize { side: 3 }));
    }

    #[test]
    fn test_kernel_rejects_one_by_one() {
        let result = Kernel::new(vec![vec![1.0]]);
        assert_eq!(result, Err(VisionError::InvalidKernelSize { side: 1 }));
    }

    #[test]
    fn test_kernel_rejects_ragged() {
        let result = Kernel::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0]]);
        assert!(matches!(
            result,
            Err(VisionError::InvalidDimensions { row: 1, .. })
        ));
    }

    #[test]
    fn test_builtin_values_exact() {
        let edge = Kernel::edge_detect();
        assert_eq!(edge.get(1, 1), 8.0);
        assert_eq!(edge.get(0, 0), -1.0);

        let blur = Kernel::blur();
        assert_eq!(blur.get(2, 2), 1.0 / 9.0);

        let sharpen = Kernel::sharpen();
        assert_eq!(sharpen.get(1, 1), 5.0);
        assert_eq!(sharpen.get(0, 0), 0.0);

        let horizontal = Kernel::horizontal_edge();
        assert_eq!(horizontal.get(0, 1), -1.0);
        assert_eq!(horizontal.get(1, 1), 0.0);
        assert_eq!(horizontal.get(2, 1), 1.0);

        let vertical = Kernel::vertical_edge();
        assert_eq!(vertical.get(1, 0), -1.0);
        assert_eq!(vertical.get(1, 1), 0.0);
        assert_eq!(vertical.get(1, 2), 1.0);
    }

    #[test]
    fn test_clamp_weight() {
        assert_eq!(clamp_weight(12.0), 9.0);
        assert_eq!(clamp_weight(-33.0), -9.0);
        assert_eq!(clamp_weight(4.5), 4.5);
    }
}
