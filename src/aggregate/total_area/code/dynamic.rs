//! Dynamic-dispatch (virtual call) strategy.
//!
//! The "clean code" baseline: iterate the polymorphic sequence and call
//! `area()` through the trait object's vtable for every element.

use crate::shapes::Shape;

/// Accumulate areas through virtual calls, one scalar accumulator.
pub fn total_area_dynamic(shapes: &[Box<dyn Shape>]) -> f32 {
    let mut accum = 0.0f32;
    for shape in shapes {
        accum += shape.area();
    }
    accum
}

/// Four independent accumulators over groups of 4 elements.
///
/// The unroll shortens the serial dependency chain on the floating-point
/// add; it does not vectorize anything (the virtual calls prevent that).
/// Partials are combined in the fixed order `(a0 + a1) + (a2 + a3)`.
pub fn total_area_dynamic_unrolled(shapes: &[Box<dyn Shape>]) -> f32 {
    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;
    let mut acc2 = 0.0f32;
    let mut acc3 = 0.0f32;

    let mut chunks = shapes.chunks_exact(4);
    for group in &mut chunks {
        acc0 += group[0].area();
        acc1 += group[1].area();
        acc2 += group[2].area();
        acc3 += group[3].area();
    }

    for shape in chunks.remainder() {
        acc0 += shape.area();
    }

    (acc0 + acc1) + (acc2 + acc3)
}
