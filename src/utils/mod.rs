//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{shuffle, time_seed, SeededRng};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub use cycles::read_cycles;

/// Information about a strategy implementation variant.
/// Generic over F which is the function representation.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "branch", "collector-simd")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation
    pub function: F,
}
