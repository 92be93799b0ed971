//! Optimized maximum-subarray scan.
//!
//! Same contract as the baseline, with three deliberate differences:
//!
//! 1. `i64` accumulators: the sum of any materializable `i32` sequence fits,
//!    so this variant cannot overflow where the baseline wraps.
//! 2. Each element is read exactly once per iteration into a local and
//!    reused for both the reset decision and the accumulation.
//! 3. The reset rule is `current_sum < 0` instead of the baseline's
//!    element-vs-extended-sum comparison. Both implement the same recurrence
//!    and the test suite pins down that the returned bounds agree.

use super::{all_negative_maximum, ScanError, ScanResult};
use crate::metrics::MetricsRecorder;

/// Find the maximum-sum contiguous run of `input`, overflow-safe.
///
/// # Errors
/// [`ScanError::EmptyInput`] when `input` has no elements.
pub fn max_subarray_optimized(input: &[i32]) -> Result<ScanResult, ScanError> {
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let mut metrics = MetricsRecorder::new();
    metrics.start_timer();

    // One read seeds both accumulators.
    metrics.add_comparisons(1);
    metrics.add_array_accesses(1);

    Ok(scan(input, metrics))
}

/// Optimized scan with the all-negative short-circuit in front.
///
/// Same fallback contract as the baseline's early-exit entry: identical
/// `(max_sum, start, end)` to [`max_subarray_optimized`] on every input.
pub fn max_subarray_optimized_early_exit(input: &[i32]) -> Result<ScanResult, ScanError> {
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let mut metrics = MetricsRecorder::new();
    metrics.start_timer();

    if let Some((max_index, max_element)) = all_negative_maximum(input, &mut metrics) {
        metrics.stop_timer();
        return Ok(ScanResult::new(
            i64::from(max_element),
            max_index,
            max_index,
            metrics,
        ));
    }

    Ok(scan(input, metrics))
}

fn scan(input: &[i32], mut metrics: MetricsRecorder) -> ScanResult {
    let mut max_sum = i64::from(input[0]);
    let mut current_sum = max_sum;
    let mut start = 0;
    let mut end = 0;
    let mut temp_start = 0;

    for (i, &element) in input.iter().enumerate().skip(1) {
        let value = i64::from(element);
        metrics.add_array_accesses(1);
        metrics.add_comparisons(1);

        // A negative running sum can only hurt; restart at this element.
        if current_sum < 0 {
            current_sum = value;
            temp_start = i;
        } else {
            current_sum += value;
        }

        metrics.add_comparisons(1);

        if current_sum > max_sum {
            max_sum = current_sum;
            start = temp_start;
            end = i;
        }
    }

    metrics.stop_timer();
    ScanResult::new(max_sum, start, end, metrics)
}
