//! Portable scalar kernels.
//!
//! Written with independent accumulators and fixed-size chunks so an
//! auto-vectorizing compiler can lower them to whatever vector width the
//! target has. These are also the reference implementations the SIMD paths
//! are tested against.

/// Sum all elements using 8 independent accumulators over chunks of 8.
pub fn sum_f32_scalar(values: &[f32]) -> f32 {
    let mut acc = [0.0f32; 8];

    let mut chunks = values.chunks_exact(8);
    for chunk in &mut chunks {
        for lane in 0..8 {
            acc[lane] += chunk[lane];
        }
    }

    // Pairwise horizontal reduction of the accumulators
    let mut total = ((acc[0] + acc[1]) + (acc[2] + acc[3]))
        + ((acc[4] + acc[5]) + (acc[6] + acc[7]));

    for &value in chunks.remainder() {
        total += value;
    }

    total
}

/// Sum of `values[i] * weights[i]` using 8 independent accumulators.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn weighted_sum_f32_scalar(values: &[f32], weights: &[f32]) -> f32 {
    assert_eq!(
        values.len(),
        weights.len(),
        "values and weights must have the same length"
    );

    let mut acc = [0.0f32; 8];

    let mut value_chunks = values.chunks_exact(8);
    let mut weight_chunks = weights.chunks_exact(8);
    for (v, w) in (&mut value_chunks).zip(&mut weight_chunks) {
        for lane in 0..8 {
            acc[lane] += v[lane] * w[lane];
        }
    }

    let mut total = ((acc[0] + acc[1]) + (acc[2] + acc[3]))
        + ((acc[4] + acc[5]) + (acc[6] + acc[7]));

    for (value, weight) in value_chunks
        .remainder()
        .iter()
        .zip(weight_chunks.remainder())
    {
        total += value * weight;
    }

    total
}
