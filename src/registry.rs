//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Each benchmarked aggregate registers itself here as an
//! [`AlgorithmRunner`]. Runners hand out closures — one per strategy — that
//! time a single aggregate call internally; warmup, scheduling, and
//! statistics live in `utils::timer`, not in the runners.

use crate::utils::bench::Measurement;
use crate::utils::timer::VariantResult;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that runs one timed iteration of a strategy.
pub struct VariantClosure {
    pub name: &'static str,
    pub description: &'static str,
    /// Returns (timing_measurement, sample_result_value).
    /// Timing happens inside the closure to eliminate Fn trait overhead;
    /// the sample result is reported so strategies can be cross-checked and
    /// the aggregate cannot be optimized away as unused.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>)>,
}

/// Trait that all aggregate benchmarkers implement.
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "total_area")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "aggregate")
    fn category(&self) -> &'static str;

    /// Get list of available strategy names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Build the dataset for `size` shapes and return one timed closure per
    /// strategy. Each closure does ONE full aggregate call; the timer
    /// handles warmup, randomized scheduling, and repetition.
    fn get_variant_closures(&self, size: usize) -> Vec<VariantClosure>;

    /// Verify correctness of all strategies against the naive reference
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

    registry.register(crate::aggregate::total_area::TotalAreaRunner);
    registry.register(crate::aggregate::corner_weighted::CornerWeightedRunner);

    registry
}
