//! The pooling engine: downsampling by non-overlapping 2x2 blocks.
//!
//! Pooling halves a grid in each dimension by summarising every 2x2 block
//! as a single value. Max pooling keeps the strongest response; average
//! pooling smooths. Odd trailing rows or columns are dropped, matching the
//! floor-halving output size.

use serde::{Deserialize, Serialize};

use crate::conv::FeatureMap;
use crate::error::VisionError;

/// How a 2x2 block is reduced to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolMode {
    /// Keep the maximum of the four values.
    Max,
    /// Round the arithmetic mean of the four values to the nearest integer
    /// (`f64::round`: halves away from zero).
    Average,
}

/// Pool a grid down to `floor(R/2) x floor(C/2)`.
///
/// Each output cell (r, c) summarises the source block at
/// `(2r, 2c), (2r, 2c+1), (2r+1, 2c), (2r+1, 2c+1)`. A trailing odd row or
/// column is silently dropped.
///
/// # Errors
///
/// Returns [`VisionError::GridTooSmall`] when the input has fewer than two
/// rows or two columns.
///
/// # Example
///
/// ```rust
/// use tutorlab_vision::{pool, FeatureMap, PoolMode};
///
/// let block = FeatureMap::new(vec![vec![4.0, 1.0], vec![3.0, 8.0]]).unwrap();
/// assert_eq!(pool(&block, PoolMode::Max).unwrap().get(0, 0), 8.0);
/// assert_eq!(pool(&block, PoolMode::Average).unwrap().get(0, 0), 4.0);
/// ```
pub fn pool(input: &FeatureMap, mode: PoolMode) -> Result<FeatureMap, VisionError> {
    let (rows, cols) = (input.height(), input.width());
    if rows < 2 || cols < 2 {
        return Err(VisionError::GridTooSmall { rows, cols });
    }

    let out_rows = rows / 2;
    let out_cols = cols / 2;
    let mut out = vec![vec![0.0; out_cols]; out_rows];

    for (r, out_row) in out.iter_mut().enumerate() {
        for (c, cell) in out_row.iter_mut().enumerate() {
            let block = [
                input.get(2 * r, 2 * c),
                input.get(2 * r, 2 * c + 1),
                input.get(2 * r + 1, 2 * c),
                input.get(2 * r + 1, 2 * c + 1),
            ];
            *cell = match mode {
                PoolMode::Max => block.into_iter().fold(f64::NEG_INFINITY, f64::max),
                PoolMode::Average => (block.iter().sum::<f64>() / 4.0).round(),
            };
        }
    }

    Ok(FeatureMap::from_rect(out))
}
