//! # Corner-Weighted Area
//!
//! `corner_weighted_area(shapes) = Σ area_i / (1 + corner_count_i)` — the
//! same aggregate as total area with an extra per-element factor, making it
//! slightly more expensive and giving the FMA kernel something to fuse.
//! Strategy set mirrors [`total_area`](crate::aggregate::total_area).

pub mod code;
pub mod test;

pub use code::*;

use crate::aggregate::verify_against_reference;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::shapes::ShapeDataset;
use std::sync::Arc;

/// Runner for the corner-weighted-area aggregate.
pub struct CornerWeightedRunner;

impl AlgorithmRunner for CornerWeightedRunner {
    fn name(&self) -> &'static str {
        "corner_weighted_area"
    }

    fn description(&self) -> &'static str {
        "Sum of areas weighted by 1/(1+corners) across all dispatch strategies"
    }

    fn category(&self) -> &'static str {
        "aggregate"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_strategies().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize) -> Vec<VariantClosure> {
        let dataset = Arc::new(ShapeDataset::round_robin(size));

        code::available_strategies()
            .into_iter()
            .map(|v| {
                let dataset = Arc::clone(&dataset);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = crate::measure!(func.eval(&dataset));
                        (elapsed, Some(result as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        verify_against_reference(&code::available_strategies(), |dataset| {
            dataset
                .shapes
                .iter()
                .map(|shape| shape.area() / (1.0 + shape.corner_count() as f32))
                .sum()
        })
    }
}
