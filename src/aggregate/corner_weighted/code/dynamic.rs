//! Dynamic-dispatch strategy for the corner-weighted sum.
//!
//! Two virtual calls per element: `corner_count()` for the weight and
//! `area()` for the value.

use crate::shapes::Shape;

pub fn corner_weighted_area_dynamic(shapes: &[Box<dyn Shape>]) -> f32 {
    let mut accum = 0.0f32;
    for shape in shapes {
        accum += (1.0 / (1.0 + shape.corner_count() as f32)) * shape.area();
    }
    accum
}

/// Four independent accumulators over groups of 4 elements; remainder goes
/// through `acc0`, partials combine as `(a0 + a1) + (a2 + a3)`.
pub fn corner_weighted_area_dynamic_unrolled(shapes: &[Box<dyn Shape>]) -> f32 {
    #[inline(always)]
    fn weighted(shape: &dyn Shape) -> f32 {
        (1.0 / (1.0 + shape.corner_count() as f32)) * shape.area()
    }

    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;
    let mut acc2 = 0.0f32;
    let mut acc3 = 0.0f32;

    let mut chunks = shapes.chunks_exact(4);
    for group in &mut chunks {
        acc0 += weighted(group[0].as_ref());
        acc1 += weighted(group[1].as_ref());
        acc2 += weighted(group[2].as_ref());
        acc3 += weighted(group[3].as_ref());
    }

    for shape in chunks.remainder() {
        acc0 += weighted(shape.as_ref());
    }

    (acc0 + acc1) + (acc2 + acc3)
}
