//! Branch-dispatch strategy for the corner-weighted sum.

use crate::aggregate::total_area::area_branch;
use crate::shapes::FlatShape;

/// Corner-weighted area of one flat record: branch once for the corner
/// count (via the kind's fixed value) and once for the area formula.
#[inline(always)]
pub fn corner_weighted_branch(shape: &FlatShape) -> f32 {
    (1.0 / (1.0 + shape.kind.corner_count() as f32)) * area_branch(shape)
}

pub fn corner_weighted_area_branch(shapes: &[FlatShape]) -> f32 {
    let mut accum = 0.0f32;
    for shape in shapes {
        accum += corner_weighted_branch(shape);
    }
    accum
}

/// Four independent accumulators over groups of 4 elements; remainder goes
/// through `acc0`, partials combine as `(a0 + a1) + (a2 + a3)`.
pub fn corner_weighted_area_branch_unrolled(shapes: &[FlatShape]) -> f32 {
    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;
    let mut acc2 = 0.0f32;
    let mut acc3 = 0.0f32;

    let mut chunks = shapes.chunks_exact(4);
    for group in &mut chunks {
        acc0 += corner_weighted_branch(&group[0]);
        acc1 += corner_weighted_branch(&group[1]);
        acc2 += corner_weighted_branch(&group[2]);
        acc3 += corner_weighted_branch(&group[3]);
    }

    for shape in chunks.remainder() {
        acc0 += corner_weighted_branch(shape);
    }

    (acc0 + acc1) + (acc2 + acc3)
}
