//! # Metrics - The Precision & Recall Tutorial Engine
//!
//! This crate holds the numeric core of the spam-filter walkthrough:
//!
//! - **Records**: the fixed synthetic inbox (100 emails, 20 spam)
//! - **Classification**: threshold decisions and confusion-matrix counts
//! - **Reports**: precision, recall, F1, and accuracy with zero-guards
//! - **Curves**: precision-recall sweeps that reuse the single-point engine
//!
//! Everything is a pure function of (population, threshold); the host drags
//! a threshold slider and recomputes, nothing is cached or mutated.
//!
//! ## Example
//!
//! ```rust
//! use tutorlab_metrics::{classify, inbox, MetricReport};
//!
//! let run = classify(&inbox(), 50).unwrap();
//! assert_eq!(run.counts.total(), 100);
//!
//! let report = MetricReport::from_counts(&run.counts);
//! assert!(report.precision > 0.0 && report.precision <= 1.0);
//! ```

pub mod classify;
pub mod curve;
pub mod error;
pub mod record;
pub mod report;

pub use classify::{classify, Category, Classification, Counts, Outcome};
pub use curve::{full_sweep, sweep, CurvePoint};
pub use error::MetricsError;
pub use record::{inbox, EmailRecord};
pub use report::{accuracy, f1, precision, recall, MetricReport};
