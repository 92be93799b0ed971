//! Benchmark utilities for the maximum-subarray scan.

use super::code::available_variants;
use crate::registry::BenchmarkResult;
use crate::utils::timer::{measure_variants, TimingConfig, Variant};
use std::hint::black_box;
use std::time::Instant;

/// Measure all scan variants over `input` and return summary statistics.
pub fn run_all_benchmarks(input: &[i32], config: &TimingConfig) -> Vec<BenchmarkResult> {
    let variants = available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let start = Instant::now();
                    let result = func(black_box(input));
                    let elapsed = start.elapsed();
                    (elapsed, result.ok().map(|r| r.max_sum() as f64))
                }),
            }
        })
        .collect();

    measure_variants(variants, config)
}
