//! Maximum-subarray scan implementations.
//!
//! This module contains all implementation variants of the scan together
//! with the shared result and error types.

mod baseline;
mod optimized;

pub use baseline::{max_subarray_baseline, max_subarray_baseline_early_exit};
pub use optimized::{max_subarray_optimized, max_subarray_optimized_early_exit};

use crate::metrics::MetricsRecorder;
use crate::utils::VariantInfo;
use std::fmt;
use thiserror::Error;

/// The single recoverable failure of the scan contract.
///
/// Overflow in the baseline variant and out-of-order timer calls are
/// documented limitations, not errors.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("input sequence must contain at least one element")]
    EmptyInput,
}

/// Outcome of one scan invocation.
///
/// `start..=end` are inclusive bounds into the input and
/// `input[start..=end].sum() == max_sum` holds for every valid result.
/// The recorder inside captured exactly the run that produced this value
/// and is owned by this result alone.
#[derive(Debug)]
pub struct ScanResult {
    max_sum: i64,
    start: usize,
    end: usize,
    metrics: MetricsRecorder,
}

impl ScanResult {
    pub(crate) fn new(max_sum: i64, start: usize, end: usize, metrics: MetricsRecorder) -> Self {
        Self {
            max_sum,
            start,
            end,
            metrics,
        }
    }

    pub fn max_sum(&self) -> i64 {
        self.max_sum
    }

    /// Inclusive start index of the winning run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Inclusive end index of the winning run.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Consume the result, keeping only the recorder.
    pub fn into_metrics(self) -> MetricsRecorder {
        self.metrics
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MaxSum: {}, Range: [{}, {}]",
            self.max_sum, self.start, self.end
        )
    }
}

/// Scan strategy, selectable by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Narrow accumulator, re-reads each element. May wrap on adversarial
    /// magnitude inputs.
    Baseline,
    /// Baseline with the all-negative short-circuit in front.
    BaselineEarlyExit,
    /// Wide accumulator, one read per element, `current_sum < 0` reset rule.
    Optimized,
    /// Optimized with the all-negative short-circuit in front.
    OptimizedEarlyExit,
}

impl ScanStrategy {
    pub const ALL: [ScanStrategy; 4] = [
        ScanStrategy::Baseline,
        ScanStrategy::BaselineEarlyExit,
        ScanStrategy::Optimized,
        ScanStrategy::OptimizedEarlyExit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScanStrategy::Baseline => "baseline",
            ScanStrategy::BaselineEarlyExit => "baseline-early-exit",
            ScanStrategy::Optimized => "optimized",
            ScanStrategy::OptimizedEarlyExit => "optimized-early-exit",
        }
    }

    /// Run this strategy over `input`.
    pub fn run(self, input: &[i32]) -> Result<ScanResult, ScanError> {
        match self {
            ScanStrategy::Baseline => max_subarray_baseline(input),
            ScanStrategy::BaselineEarlyExit => max_subarray_baseline_early_exit(input),
            ScanStrategy::Optimized => max_subarray_optimized(input),
            ScanStrategy::OptimizedEarlyExit => max_subarray_optimized_early_exit(input),
        }
    }
}

/// Function signature shared by all scan variants.
pub type ScanFn = fn(&[i32]) -> Result<ScanResult, ScanError>;

/// Get all scan variants.
pub fn available_variants() -> Vec<VariantInfo<ScanFn>> {
    vec![
        VariantInfo {
            name: "baseline",
            description: "Reference scan: narrow accumulator, re-reads elements",
            function: max_subarray_baseline,
        },
        VariantInfo {
            name: "baseline-early-exit",
            description: "Baseline with all-negative short-circuit",
            function: max_subarray_baseline_early_exit,
        },
        VariantInfo {
            name: "optimized",
            description: "Wide accumulator, single element read, simplified reset",
            function: max_subarray_optimized,
        },
        VariantInfo {
            name: "optimized-early-exit",
            description: "Optimized with all-negative short-circuit",
            function: max_subarray_optimized_early_exit,
        },
    ]
}

/// Pre-scan for the all-negative shortcut shared by both early-exit entries.
///
/// Walks the sequence until the first non-negative element, counting one
/// access and one comparison per element visited. Returns the position and
/// value of the maximum element (first occurrence wins) when every element
/// is negative, `None` as soon as a non-negative element shows up.
/// Callers have already rejected empty input.
pub(crate) fn all_negative_maximum(
    input: &[i32],
    metrics: &mut MetricsRecorder,
) -> Option<(usize, i32)> {
    let mut max_element = input[0];
    let mut max_index = 0;

    for (i, &value) in input.iter().enumerate() {
        metrics.add_array_accesses(1);
        metrics.add_comparisons(1);

        if value >= 0 {
            return None;
        }
        if value > max_element {
            max_element = value;
            max_index = i;
        }
    }

    Some((max_index, max_element))
}
