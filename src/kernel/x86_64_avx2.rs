//! x86_64 AVX2 reduction kernels.
//!
//! Eight 256-bit accumulators process 64 f32 values per outer iteration.
//! The unroll keeps eight independent add/FMA dependency chains in flight,
//! hiding the multi-cycle latency of vector floating-point addition.
//! Software prefetch hints are issued for upcoming blocks on arrays of at
//! least [`PREFETCH_THRESHOLD`] elements; they are hints only, correctness
//! never depends on them landing.

use std::arch::x86_64::*;

/// Arrays shorter than this see no benefit from software prefetch.
const PREFETCH_THRESHOLD: usize = 128;

/// Sum all elements using AVX2.
///
/// Processes 64 elements per main-loop iteration with 8 accumulator
/// registers, then an 8-wide remainder loop, a horizontal reduction, and a
/// scalar tail.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub fn sum_f32_avx2(values: &[f32]) -> f32 {
    let len = values.len();

    if len < 8 {
        return values.iter().sum();
    }

    unsafe {
        let ptr = values.as_ptr();

        let mut sum0 = _mm256_setzero_ps();
        let mut sum1 = _mm256_setzero_ps();
        let mut sum2 = _mm256_setzero_ps();
        let mut sum3 = _mm256_setzero_ps();
        let mut sum4 = _mm256_setzero_ps();
        let mut sum5 = _mm256_setzero_ps();
        let mut sum6 = _mm256_setzero_ps();
        let mut sum7 = _mm256_setzero_ps();

        let mut i = 0;

        if len >= PREFETCH_THRESHOLD {
            _mm_prefetch::<_MM_HINT_T0>(ptr.wrapping_add(64) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(ptr.wrapping_add(96) as *const i8);
        }

        while i + 64 <= len {
            _mm_prefetch::<_MM_HINT_T0>(ptr.wrapping_add(i + 128) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(ptr.wrapping_add(i + 160) as *const i8);

            sum0 = _mm256_add_ps(sum0, _mm256_loadu_ps(ptr.add(i)));
            sum1 = _mm256_add_ps(sum1, _mm256_loadu_ps(ptr.add(i + 8)));
            sum2 = _mm256_add_ps(sum2, _mm256_loadu_ps(ptr.add(i + 16)));
            sum3 = _mm256_add_ps(sum3, _mm256_loadu_ps(ptr.add(i + 24)));
            sum4 = _mm256_add_ps(sum4, _mm256_loadu_ps(ptr.add(i + 32)));
            sum5 = _mm256_add_ps(sum5, _mm256_loadu_ps(ptr.add(i + 40)));
            sum6 = _mm256_add_ps(sum6, _mm256_loadu_ps(ptr.add(i + 48)));
            sum7 = _mm256_add_ps(sum7, _mm256_loadu_ps(ptr.add(i + 56)));
            i += 64;
        }

        // Pairwise: 8 accumulators -> 4 -> 2 -> 1
        sum0 = _mm256_add_ps(sum0, sum4);
        sum1 = _mm256_add_ps(sum1, sum5);
        sum2 = _mm256_add_ps(sum2, sum6);
        sum3 = _mm256_add_ps(sum3, sum7);
        sum0 = _mm256_add_ps(sum0, sum1);
        sum2 = _mm256_add_ps(sum2, sum3);
        sum0 = _mm256_add_ps(sum0, sum2);

        // Lane-width remainder
        while i + 8 <= len {
            sum0 = _mm256_add_ps(sum0, _mm256_loadu_ps(ptr.add(i)));
            i += 8;
        }

        let mut total = horizontal_sum(sum0);

        // Scalar tail
        while i < len {
            total += *ptr.add(i);
            i += 1;
        }

        total
    }
}

/// Sum of `values[i] * weights[i]` using AVX2 with fused multiply-add.
///
/// Caller guarantees equal lengths; the public wrapper in the parent module
/// asserts it.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub fn weighted_sum_f32_avx2(values: &[f32], weights: &[f32]) -> f32 {
    debug_assert_eq!(values.len(), weights.len());

    let len = values.len();

    if len < 8 {
        return values.iter().zip(weights).map(|(v, w)| v * w).sum();
    }

    unsafe {
        let vptr = values.as_ptr();
        let wptr = weights.as_ptr();

        let mut sum0 = _mm256_setzero_ps();
        let mut sum1 = _mm256_setzero_ps();
        let mut sum2 = _mm256_setzero_ps();
        let mut sum3 = _mm256_setzero_ps();
        let mut sum4 = _mm256_setzero_ps();
        let mut sum5 = _mm256_setzero_ps();
        let mut sum6 = _mm256_setzero_ps();
        let mut sum7 = _mm256_setzero_ps();

        let mut i = 0;

        if len >= PREFETCH_THRESHOLD {
            _mm_prefetch::<_MM_HINT_T0>(vptr.wrapping_add(64) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(vptr.wrapping_add(128) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(wptr.wrapping_add(64) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(wptr.wrapping_add(128) as *const i8);
        }

        while i + 64 <= len {
            _mm_prefetch::<_MM_HINT_T0>(vptr.wrapping_add(i + 128) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(vptr.wrapping_add(i + 160) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(wptr.wrapping_add(i + 128) as *const i8);
            _mm_prefetch::<_MM_HINT_T0>(wptr.wrapping_add(i + 160) as *const i8);

            sum0 = mul_accumulate(vptr.add(i), wptr.add(i), sum0);
            sum1 = mul_accumulate(vptr.add(i + 8), wptr.add(i + 8), sum1);
            sum2 = mul_accumulate(vptr.add(i + 16), wptr.add(i + 16), sum2);
            sum3 = mul_accumulate(vptr.add(i + 24), wptr.add(i + 24), sum3);
            sum4 = mul_accumulate(vptr.add(i + 32), wptr.add(i + 32), sum4);
            sum5 = mul_accumulate(vptr.add(i + 40), wptr.add(i + 40), sum5);
            sum6 = mul_accumulate(vptr.add(i + 48), wptr.add(i + 48), sum6);
            sum7 = mul_accumulate(vptr.add(i + 56), wptr.add(i + 56), sum7);
            i += 64;
        }

        sum0 = _mm256_add_ps(sum0, sum4);
        sum1 = _mm256_add_ps(sum1, sum5);
        sum2 = _mm256_add_ps(sum2, sum6);
        sum3 = _mm256_add_ps(sum3, sum7);
        sum0 = _mm256_add_ps(sum0, sum1);
        sum2 = _mm256_add_ps(sum2, sum3);
        sum0 = _mm256_add_ps(sum0, sum2);

        while i + 8 <= len {
            sum0 = mul_accumulate(vptr.add(i), wptr.add(i), sum0);
            i += 8;
        }

        let mut total = horizontal_sum(sum0);

        while i < len {
            total += *vptr.add(i) * *wptr.add(i);
            i += 1;
        }

        total
    }
}

/// Load 8 values and 8 weights, multiply, and fold into `acc`.
///
/// Uses a single-rounding fused multiply-add when the target has FMA,
/// otherwise a separate multiply and add.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[inline(always)]
unsafe fn mul_accumulate(values: *const f32, weights: *const f32, acc: __m256) -> __m256 {
    let v = _mm256_loadu_ps(values);
    let w = _mm256_loadu_ps(weights);

    #[cfg(target_feature = "fma")]
    {
        _mm256_fmadd_ps(v, w, acc)
    }
    #[cfg(not(target_feature = "fma"))]
    {
        _mm256_add_ps(acc, _mm256_mul_ps(v, w))
    }
}

/// Reduce the 8 lanes of a 256-bit accumulator to one scalar.
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[inline(always)]
unsafe fn horizontal_sum(acc: __m256) -> f32 {
    let hi = _mm256_extractf128_ps(acc, 1);
    let lo = _mm256_castps256_ps128(acc);
    let mut sum128 = _mm_add_ps(lo, hi);
    sum128 = _mm_hadd_ps(sum128, sum128);
    sum128 = _mm_hadd_ps(sum128, sum128);
    _mm_cvtss_f32(sum128)
}
