//! Aggregate computations over shape collections.
//!
//! Two algorithms, each computed by every dispatch strategy the suite
//! compares:
//!
//! - [`total_area`]: `Σ area_i`
//! - [`corner_weighted`]: `Σ area_i / (1 + corner_count_i)`
//!
//! Strategies differ in which representation of the dataset they read, so a
//! strategy entry carries a [`StrategyFn`] naming its input representation
//! rather than a single uniform function pointer.

pub mod corner_weighted;
pub mod total_area;

use crate::shapes::{AreaCollector, CornerCollector, FlatShape, Shape, ShapeDataset};

/// An aggregate function together with the representation it consumes.
#[derive(Clone, Copy)]
pub enum StrategyFn {
    /// Iterates boxed trait objects (virtual dispatch).
    Dynamic(fn(&[Box<dyn Shape>]) -> f32),
    /// Iterates flat tagged records (branch and table dispatch).
    Flat(fn(&[FlatShape]) -> f32),
    /// Consumes precomputed areas (vectorized reduction).
    Areas(fn(&AreaCollector) -> f32),
    /// Consumes precomputed areas and corner weights (vectorized FMA).
    Weighted(fn(&CornerCollector) -> f32),
}

impl StrategyFn {
    /// Run the strategy against whichever representation of `dataset` it
    /// needs. All representations describe the same logical shapes, so
    /// every strategy of one algorithm returns the same aggregate up to
    /// summation-order rounding.
    pub fn eval(&self, dataset: &ShapeDataset) -> f32 {
        match self {
            StrategyFn::Dynamic(f) => f(&dataset.shapes),
            StrategyFn::Flat(f) => f(&dataset.flat),
            StrategyFn::Areas(f) => f(&dataset.area_collector),
            StrategyFn::Weighted(f) => f(&dataset.corner_collector),
        }
    }
}

/// Verify every strategy of one algorithm against a naive serial reference.
///
/// Uses seeded-random dimensions and a deliberately non-aligned element
/// count so unroll and SIMD tail paths are exercised. Tolerance is relative:
/// strategies reorder additions, so only summation-order-level agreement is
/// expected.
pub(crate) fn verify_against_reference(
    strategies: &[crate::utils::VariantInfo<StrategyFn>],
    reference: fn(&ShapeDataset) -> f32,
) -> Result<(), String> {
    use crate::utils::bench::SeededRng;

    let mut rng = SeededRng::new(0x5AFE_5EED);
    let dataset = ShapeDataset::random(1023, &mut rng);
    let expected = reference(&dataset);

    for strategy in strategies {
        let result = strategy.function.eval(&dataset);
        let tolerance = 1e-4 * expected.abs().max(1.0);
        let diff = (result - expected).abs();
        if diff > tolerance {
            return Err(format!(
                "Strategy '{}' failed verification. Expected {}, got {}, diff {}",
                strategy.name, expected, result, diff
            ));
        }
    }

    Ok(())
}
