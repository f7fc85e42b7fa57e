//! Vectorized reduction kernel.
//!
//! Computes plain sums and weighted (FMA) sums over flat `f32` arrays. This
//! is the only module in the crate allowed to contain hardware-specific
//! vector types; every caller goes through [`sum_f32`] / [`weighted_sum_f32`]
//! and stays portable. Retargeting to a different vector width means
//! rewriting one implementation file here and nothing else.
//!
//! All paths share the same algorithmic shape: multiple independent
//! accumulators advanced in an unrolled main loop (hiding floating-point add
//! latency), a horizontal reduction of the accumulators, and a scalar tail
//! for lengths not divisible by the chunk size. The accumulation order
//! differs from a naive serial sum, so results match the naive sum only
//! within floating-point summation tolerance, never bitwise.

mod scalar;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;

pub use scalar::{sum_f32_scalar, weighted_sum_f32_scalar};

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::{sum_f32_avx2, weighted_sum_f32_avx2};

/// Sum all elements of `values`.
///
/// Dispatches to the widest kernel the build targets; an empty slice sums
/// to `0.0`.
#[inline]
pub fn sum_f32(values: &[f32]) -> f32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    {
        sum_f32_avx2(values)
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
    {
        sum_f32_scalar(values)
    }
}

/// Sum of `values[i] * weights[i]` over all indices.
///
/// # Panics
/// Panics if the slices have different lengths. Mismatched lengths are a
/// programming error at the call site, not a runtime condition; the check
/// runs once at entry, never inside the reduction loop.
#[inline]
pub fn weighted_sum_f32(values: &[f32], weights: &[f32]) -> f32 {
    assert_eq!(
        values.len(),
        weights.len(),
        "values and weights must have the same length"
    );

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    {
        weighted_sum_f32_avx2(values, weights)
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
    {
        weighted_sum_f32_scalar(values, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bench::SeededRng;

    /// Lengths chosen to hit every path: empty, scalar-tail only, one lane,
    /// partial unroll, full unroll, unroll + lane + tail, and both sides of
    /// the prefetch threshold.
    const BOUNDARY_LENGTHS: [usize; 10] = [0, 1, 7, 8, 63, 64, 65, 127, 128, 129];

    fn random_values(len: usize, rng: &mut SeededRng) -> Vec<f32> {
        (0..len).map(|_| rng.next_f32_range()).collect()
    }

    fn naive_sum(values: &[f32]) -> f32 {
        values.iter().sum()
    }

    fn naive_weighted_sum(values: &[f32], weights: &[f32]) -> f32 {
        values.iter().zip(weights).map(|(v, w)| v * w).sum()
    }

    fn assert_close(a: f32, b: f32, msg: &str) {
        let tolerance = 1e-4 * b.abs().max(1.0);
        assert!(
            (a - b).abs() <= tolerance,
            "{}: expected {}, got {}",
            msg,
            b,
            a
        );
    }

    #[test]
    fn test_sum_boundary_lengths() {
        let mut rng = SeededRng::new(7);
        for &len in &BOUNDARY_LENGTHS {
            let values = random_values(len, &mut rng);
            assert_close(
                sum_f32(&values),
                naive_sum(&values),
                &format!("sum at length {}", len),
            );
        }
    }

    #[test]
    fn test_weighted_sum_boundary_lengths() {
        let mut rng = SeededRng::new(11);
        for &len in &BOUNDARY_LENGTHS {
            let values = random_values(len, &mut rng);
            let weights = random_values(len, &mut rng);
            assert_close(
                weighted_sum_f32(&values, &weights),
                naive_weighted_sum(&values, &weights),
                &format!("weighted sum at length {}", len),
            );
        }
    }

    #[test]
    fn test_empty_sums_to_zero() {
        assert_eq!(sum_f32(&[]), 0.0);
        assert_eq!(weighted_sum_f32(&[], &[]), 0.0);
    }

    #[test]
    fn test_scalar_path_directly() {
        let mut rng = SeededRng::new(13);
        for &len in &BOUNDARY_LENGTHS {
            let values = random_values(len, &mut rng);
            let weights = random_values(len, &mut rng);
            assert_close(
                sum_f32_scalar(&values),
                naive_sum(&values),
                &format!("scalar sum at length {}", len),
            );
            assert_close(
                weighted_sum_f32_scalar(&values, &weights),
                naive_weighted_sum(&values, &weights),
                &format!("scalar weighted sum at length {}", len),
            );
        }
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    #[test]
    fn test_avx2_agrees_with_scalar() {
        let mut rng = SeededRng::new(17);
        for &len in &BOUNDARY_LENGTHS {
            let values = random_values(len, &mut rng);
            let weights = random_values(len, &mut rng);
            assert_close(
                sum_f32_avx2(&values),
                sum_f32_scalar(&values),
                &format!("avx2 sum at length {}", len),
            );
            assert_close(
                weighted_sum_f32_avx2(&values, &weights),
                weighted_sum_f32_scalar(&values, &weights),
                &format!("avx2 weighted sum at length {}", len),
            );
        }
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_weighted_sum_length_mismatch_panics() {
        weighted_sum_f32(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_idempotent() {
        let mut rng = SeededRng::new(19);
        let values = random_values(129, &mut rng);
        assert_eq!(sum_f32(&values), sum_f32(&values));
    }
}
