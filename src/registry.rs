//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! The CLI selects algorithms by name out of this registry instead of
//! hard-wiring a binary per algorithm.

use crate::utils::runner::RawScanRecord;
use crate::utils::timer::VariantResult;
use crate::utils::InputSpec;
use std::time::Duration;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A simple closure that runs one iteration of a variant
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Returns (elapsed, optional result value). Timing happens inside the
    /// closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Duration, Option<f64>) + 'a>,
}

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "max_subarray")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "array")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure does ONE execution over input generated from `spec` and
    /// `seed`. The harness handles warmup, timing and repetition.
    fn variant_closures<'a>(&'a self, spec: &InputSpec, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Run every variant `runs` times with its own instrumentation and
    /// return one record per invocation, for operation-count reporting and
    /// CSV export. Each run uses a fresh input derived from `seed`.
    fn scan_records(&self, spec: &InputSpec, runs: usize, seed: u64) -> Vec<RawScanRecord>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::array::max_subarray::MaxSubarrayRunner);

    registry
}
