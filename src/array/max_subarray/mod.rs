//! # Maximum-Subarray Scan
//!
//! Finds the contiguous run with the maximum sum in a sequence of signed
//! integers, reporting the sum, its inclusive bounds and a count of the
//! primitive operations spent finding it:
//!
//! `max over 0 <= s <= e < n of Σ(input[s..=e])`
//!
//! ## Variants
//!
//! - **baseline**: reference single-pass scan, narrow `i32` accumulator,
//!   re-reads each element per decision
//! - **optimized**: `i64` accumulator (overflow-safe), one read per element,
//!   `current_sum < 0` reset rule
//! - **\*-early-exit**: either scan behind a pre-scan that answers
//!   all-negative inputs directly from the maximum element
//!
//! All variants run in O(n) time and O(1) extra space and return identical
//! `(max_sum, start, end)` wherever the baseline accumulator does not wrap.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::runner::RawScanRecord;
use crate::utils::InputSpec;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

/// Runner for the maximum-subarray scan
pub struct MaxSubarrayRunner;

impl AlgorithmRunner for MaxSubarrayRunner {
    fn name(&self) -> &'static str {
        "max_subarray"
    }

    fn description(&self) -> &'static str {
        "Finds the maximum-sum contiguous run and counts the operations spent"
    }

    fn category(&self) -> &'static str {
        "array"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, spec: &InputSpec, seed: u64) -> Vec<VariantClosure<'a>> {
        let input: Arc<Vec<i32>> = Arc::new(spec.generate(seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let input = Arc::clone(&input);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let start = Instant::now();
                        let result = func(&input);
                        let elapsed = start.elapsed();
                        let sample = result.ok().map(|r| std::hint::black_box(r.max_sum()) as f64);
                        (elapsed, sample)
                    }),
                }
            })
            .collect()
    }

    fn scan_records(&self, spec: &InputSpec, runs: usize, seed: u64) -> Vec<RawScanRecord> {
        let mut records = Vec::new();

        for run in 0..runs {
            // Fresh input per run so the batch samples more than one array.
            let input = spec.generate(seed.wrapping_add(run as u64));

            for v in code::available_variants() {
                if let Ok(result) = (v.function)(&input) {
                    records.push(RawScanRecord {
                        algorithm: self.name(),
                        variant: v.name,
                        distribution: spec.distribution.label(),
                        run: run + 1,
                        input_size: spec.len,
                        metrics: result.into_metrics(),
                    });
                }
            }
        }

        records
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        // Non-aligned size, magnitudes small enough that the baseline
        // accumulator cannot wrap
        let size = 1023;
        let input: Vec<i32> = (0..size).map(|_| rng.random_range(-100..=100)).collect();
        verify_on(&input)?;

        // The early-exit entries take a different path on all-negative input
        let negative: Vec<i32> = (0..size).map(|_| rng.random_range(-100..=-1)).collect();
        verify_on(&negative)
    }
}

fn verify_on(input: &[i32]) -> Result<(), String> {
    let variants = code::available_variants();
    let reference_variant = variants
        .iter()
        .find(|v| v.name == "baseline")
        .ok_or("No 'baseline' variant found for reference")?;

    let reference = (reference_variant.function)(input)
        .map_err(|e| format!("Reference variant failed: {}", e))?;

    for variant in &variants {
        let result = (variant.function)(input)
            .map_err(|e| format!("Variant '{}' failed: {}", variant.name, e))?;

        let actual: i64 = input[result.start()..=result.end()]
            .iter()
            .map(|&v| i64::from(v))
            .sum();
        if actual != result.max_sum() {
            return Err(format!(
                "Variant '{}' broke the sum invariant: range [{}, {}] sums to {}, reported {}",
                variant.name,
                result.start(),
                result.end(),
                actual,
                result.max_sum()
            ));
        }

        if (result.max_sum(), result.start(), result.end())
            != (reference.max_sum(), reference.start(), reference.end())
        {
            return Err(format!(
                "Variant '{}' failed verification. Expected {}, got {}",
                variant.name, reference, result
            ));
        }
    }

    Ok(())
}
