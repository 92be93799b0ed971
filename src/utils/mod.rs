//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{shuffle, shuffle_with_rng, time_seed, Distribution, InputSpec, SeededRng};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{calculate_median, measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "baseline", "optimized")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
