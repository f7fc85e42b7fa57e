//! Table-lookup strategy for the corner-weighted sum.
//!
//! Folds the corner weight into the area coefficient at compile time:
//! `weighted_area = COEFFS[kind] * width * height` where
//! `COEFFS[kind] = area_coefficient[kind] / (1 + corner_count[kind])`.
//! Shares the factorability limitation of the plain area table.

use crate::shapes::{FlatShape, KIND_COUNT};
use std::f32::consts::PI;

/// Per-kind corner-weighted coefficients, indexed by `ShapeKind` ordinal.
/// Circle has no corners, so its entry stays π.
pub static CORNER_WEIGHTED_COEFFS: [f32; KIND_COUNT] = [
    1.0 / (1.0 + 4.0), // Square
    1.0 / (1.0 + 4.0), // Rectangle
    0.5 / (1.0 + 3.0), // Triangle
    PI,                // Circle
];

#[inline(always)]
pub fn corner_weighted_table(shape: &FlatShape) -> f32 {
    CORNER_WEIGHTED_COEFFS[shape.kind.index()] * shape.width * shape.height
}

pub fn corner_weighted_area_table(shapes: &[FlatShape]) -> f32 {
    let mut accum = 0.0f32;
    for shape in shapes {
        accum += corner_weighted_table(shape);
    }
    accum
}

/// Four independent accumulators over groups of 4 elements; remainder goes
/// through `acc0`, partials combine as `(a0 + a1) + (a2 + a3)`.
pub fn corner_weighted_area_table_unrolled(shapes: &[FlatShape]) -> f32 {
    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;
    let mut acc2 = 0.0f32;
    let mut acc3 = 0.0f32;

    let mut chunks = shapes.chunks_exact(4);
    for group in &mut chunks {
        acc0 += corner_weighted_table(&group[0]);
        acc1 += corner_weighted_table(&group[1]);
        acc2 += corner_weighted_table(&group[2]);
        acc3 += corner_weighted_table(&group[3]);
    }

    for shape in chunks.remainder() {
        acc0 += corner_weighted_table(shape);
    }

    (acc0 + acc1) + (acc2 + acc3)
}
