//! Baseline maximum-subarray scan.
//!
//! Single left-to-right pass, O(n) time, O(1) extra space. This is the
//! reference for correctness and for the operation-count comparison: it
//! deliberately re-reads the sequence at the same index and decides whether
//! to start a new run by comparing the lone element against the extended
//! running sum.
//!
//! The accumulators are `i32`, as narrow as the elements. On inputs whose
//! running sums exceed `i32` range the arithmetic wraps silently; that is a
//! documented limitation of this variant, never a panic.

use super::{all_negative_maximum, ScanError, ScanResult};
use crate::metrics::MetricsRecorder;

/// Find the maximum-sum contiguous run of `input`.
///
/// Among equal-maximum runs the leftmost by start position wins, because the
/// best-so-far only moves on strict `>`.
///
/// # Errors
/// [`ScanError::EmptyInput`] when `input` has no elements.
///
/// # Example
/// ```
/// use kadane_bench::array::max_subarray::max_subarray_baseline;
///
/// let result = max_subarray_baseline(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap();
/// assert_eq!(result.max_sum(), 6);
/// assert_eq!((result.start(), result.end()), (3, 6));
/// ```
pub fn max_subarray_baseline(input: &[i32]) -> Result<ScanResult, ScanError> {
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let mut metrics = MetricsRecorder::new();
    metrics.start_timer();

    // Both accumulators read input[0] independently.
    metrics.add_comparisons(1);
    metrics.add_array_accesses(2);

    Ok(scan(input, metrics))
}

/// Baseline scan with the all-negative short-circuit in front.
///
/// When no element is non-negative the answer is the single maximum element,
/// so the general scan is skipped. Returns the same `(max_sum, start, end)`
/// as [`max_subarray_baseline`] on every input.
pub fn max_subarray_baseline_early_exit(input: &[i32]) -> Result<ScanResult, ScanError> {
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

/// The general pass. The caller has already validated the input, started the
/// timer and accounted for any work done before this point.
fn scan(input: &[i32], mut metrics: MetricsRecorder) -> ScanResult {
    let mut max_sum = input[0];
    let mut current_sum = input[0];
    let mut start = 0;
    let mut end = 0;
    let mut temp_start = 0;

    for i in 1..input.len() {
        metrics.add_array_accesses(1);
        metrics.add_comparisons(1);

        // Starting fresh beats extending only when the running sum drags
        // the element down.
        if input[i] > current_sum.wrapping_add(input[i]) {
            current_sum = input[i];
            temp_start = i;
        } else {
            current_sum = current_sum.wrapping_add(input[i]);
        }

        metrics.add_comparisons(1);

        if current_sum > max_sum {
            max_sum = current_sum;
            start = temp_start;
            end = i;
        }
    }

    metrics.stop_timer();
    ScanResult::new(i64::from(max_sum), start, end, metrics)
}
