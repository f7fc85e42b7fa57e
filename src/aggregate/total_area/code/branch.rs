//! Branch-dispatch (switch) strategy.
//!
//! Iterates the flat encoding and selects each area formula inline with a
//! `match` on the kind tag. No indirect calls; the whole formula is visible
//! to the optimizer.

use crate::shapes::{FlatShape, ShapeKind};

/// Area of one flat record, selected by branching on the kind tag.
#[inline(always)]
pub fn area_branch(shape: &FlatShape) -> f32 {
    match shape.kind {
        ShapeKind::Square => shape.width * shape.width,
        ShapeKind::Rectangle => shape.width * shape.height,
        ShapeKind::Triangle => 0.5 * shape.width * shape.height,
        ShapeKind::Circle => std::f32::consts::PI * shape.width * shape.width,
    }
}

pub fn total_area_branch(shapes: &[FlatShape]) -> f32 {
    let mut accum = 0.0f32;
    for shape in shapes {
        accum += area_branch(shape);
    }
    accum
}

/// Four independent accumulators over groups of 4 elements; remainder goes
/// through `acc0`, partials combine as `(a0 + a1) + (a2 + a3)`.
pub fn total_area_branch_unrolled(shapes: &[FlatShape]) -> f32 {
    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;
    let mut acc2 = 0.0f32;
    let mut acc3 = 0.0f32;

    let mut chunks = shapes.chunks_exact(4);
    for group in &mut chunks {
        acc0 += area_branch(&group[0]);
        acc1 += area_branch(&group[1]);
        acc2 += area_branch(&group[2]);
        acc3 += area_branch(&group[3]);
    }

    for shape in chunks.remainder() {
        acc0 += area_branch(shape);
    }

    (acc0 + acc1) + (acc2 + acc3)
}
