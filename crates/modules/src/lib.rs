//! # Modules - The Shipped TutorLab Walkthroughs
//!
//! This crate assembles the engines into the two tutorial modules the
//! product ships:
//!
//! - [`VisionModule`]: pixels → grayscale → convolution → pooling, driven
//!   by a kernel picker and a pooling toggle
//! - [`SpamModule`]: a fixed inbox classified against a draggable decision
//!   threshold, with live precision/recall/F1 and the full PR curve
//!
//! Each module owns its stage plan, its interactive parameters, and its
//! precomputed engine outputs; navigation goes through the shared progress
//! machine from `tutorlab-core` and persists one cursor integer per module.
//!
//! ## Example
//!
//! ```rust
//! use tutorlab_core::MemoryStore;
//! use tutorlab_modules::SpamModule;
//!
//! let mut store = MemoryStore::new();
//! let mut module = SpamModule::new(&store).unwrap();
//! module.start(&mut store);
//! module.set_threshold(70).unwrap();
//! // The readout and the curve share one engine, so they agree exactly.
//! assert_eq!(module.report().precision, module.curve()[70].precision);
//! ```

pub mod spam_module;
pub mod vision_module;

pub use spam_module::SpamModule;
pub use vision_module::{BuiltinKernel, KernelChoice, VisionModule, VisionPipeline};
