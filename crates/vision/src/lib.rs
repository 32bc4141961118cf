//! # Vision - The Computer-Vision Tutorial Engines
//!
//! This crate holds the numeric core of the computer-vision walkthrough:
//!
//! - **Image model**: RGB pixel grids with grayscale and per-channel views
//! - **Convolution engine**: valid-only, stride-1 kernel sweeps
//! - **Pooling engine**: 2x2 max/average downsampling
//!
//! The three stages form the classic CNN teaching pipeline:
//!
//! ```text
//!   PixelGrid ──grayscale──▶ IntensityGrid ──convolve──▶ FeatureMap ──pool──▶ FeatureMap
//!    (16x16)                    (16x16)                    (14x14)              (7x7)
//! ```
//!
//! Every engine is a pure function: outputs depend only on explicit inputs,
//! so a host can precompute the pipeline once per parameter change and
//! render from the results for any number of frames.
//!
//! ## Example
//!
//! ```rust
//! use tutorlab_vision::{cat_image, convolve, pool, Kernel, PoolMode};
//!
//! let gray = cat_image().to_grayscale();
//! let features = convolve(&gray.to_feature_map(), &Kernel::edge_detect()).unwrap();
//! let pooled = pool(&features, PoolMode::Max).unwrap();
//!
//! assert_eq!((features.height(), features.width()), (14, 14));
//! assert_eq!((pooled.height(), pooled.width()), (7, 7));
//! ```

pub mod conv;
pub mod error;
pub mod image;
pub mod kernel;
pub mod pool;

pub use conv::{convolve, FeatureMap};
pub use error::VisionError;
pub use image::{cat_image, Channel, IntensityGrid, PixelGrid, Rgb};
pub use kernel::{clamp_weight, Kernel, CUSTOM_WEIGHT_LIMIT};
pub use pool::{pool, PoolMode};
