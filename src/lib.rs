//! # Kadane-Bench
//!
//! Instrumented implementations of the maximum-subarray scan, built to let
//! an analyst verify the O(n) time / O(1) space behavior of the algorithm
//! empirically and compare a baseline implementation against a
//! hand-optimized one. Every scan invocation returns the winning run's sum
//! and bounds together with a recorder of the comparisons, element reads,
//! elapsed time and memory delta spent computing it.

pub mod array;
pub mod metrics;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::array::max_subarray::{
        max_subarray_baseline, max_subarray_optimized, ScanError, ScanResult, ScanStrategy,
    };
    pub use crate::metrics::MetricsRecorder;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
