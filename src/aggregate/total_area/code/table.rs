//! Table-lookup strategy.
//!
//! Replaces the per-kind branch with a coefficient table indexed by the kind
//! ordinal: `area = AREA_COEFFS[kind] * width * height`. This is exact only
//! because every current kind's area factors as `constant * dim1 * dim2` in
//! the flat encoding (Square and Circle duplicate their single dimension
//! into both fields). A kind whose area does not factor that way — say a
//! triangle given by three independent sides — cannot be expressed here
//! without a fallback branch. Known limitation of this strategy, carried
//! deliberately.

use crate::shapes::{FlatShape, KIND_COUNT};
use std::f32::consts::PI;

/// Per-kind area coefficients, indexed by `ShapeKind` ordinal:
/// Square 1.0, Rectangle 1.0, Triangle 0.5, Circle π.
pub static AREA_COEFFS: [f32; KIND_COUNT] = [1.0, 1.0, 0.5, PI];

/// Area of one flat record via table lookup.
#[inline(always)]
pub fn area_table(shape: &FlatShape) -> f32 {
    AREA_COEFFS[shape.kind.index()] * shape.width * shape.height
}

pub fn total_area_table(shapes: &[FlatShape]) -> f32 {
    let mut accum = 0.0f32;
    for shape in shapes {
        accum += area_table(shape);
    }
    accum
}

/// Four independent accumulators over groups of 4 elements; remainder goes
/// through `acc0`, partials combine as `(a0 + a1) + (a2 + a3)`.
pub fn total_area_table_unrolled(shapes: &[FlatShape]) -> f32 {
    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;
    let mut acc2 = 0.0f32;
    let mut acc3 = 0.0f32;

    let mut chunks = shapes.chunks_exact(4);
    for group in &mut chunks {
        acc0 += area_table(&group[0]);
        acc1 += area_table(&group[1]);
        acc2 += area_table(&group[2]);
        acc3 += area_table(&group[3]);
    }

    for shape in chunks.remainder() {
        acc0 += area_table(shape);
    }

    (acc0 + acc1) + (acc2 + acc3)
}
