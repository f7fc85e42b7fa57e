//! # Total Area
//!
//! `total_area(shapes) = Σ area_i`, computed four ways over the same logical
//! shapes:
//!
//! - **dynamic**: virtual calls through the `Shape` trait object
//! - **branch**: `match` on the kind tag of the flat encoding
//! - **table**: coefficient lookup indexed by the kind ordinal
//! - **collector-simd**: precomputed area array reduced by the SIMD kernel
//!
//! The dynamic, branch, and table strategies also come in 4-way unrolled
//! variants that trade one serial add chain for four independent ones.

pub mod code;
pub mod test;

pub use code::*;

use crate::aggregate::verify_against_reference;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::shapes::ShapeDataset;
use std::sync::Arc;

/// Runner for the total-area aggregate.
pub struct TotalAreaRunner;

impl AlgorithmRunner for TotalAreaRunner {
    fn name(&self) -> &'static str {
        "total_area"
    }

    fn description(&self) -> &'static str {
        "Sum of shape areas across all dispatch strategies"
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
            dataset.shapes.iter().map(|shape| shape.area()).sum()
        })
    }
}
