//! Shared benchmark utilities.
//!
//! Measurement abstraction plus the seeded PRNG used for reproducible
//! datasets and schedule shuffling.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

use std::time::Duration;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================
//
// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Read current measurement (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Calculate elapsed measurement
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Convert measurement to nanoseconds (raw cycles in cycle mode) for stats
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(target_arch = "x86_64")]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a (nanos-or-cycles) value for display, scaling time units.
pub fn format_measurement(value: Duration) -> String {
    let unit = unit_name();
    let raw = value.as_nanos() as f64;

    if unit != "ns" {
        return format!("{:.0} {}", raw, unit);
    }

    if raw >= 1_000_000_000.0 {
        format!("{:.2} s", raw / 1_000_000_000.0)
    } else if raw >= 1_000_000.0 {
        format!("{:.2} ms", raw / 1_000_000.0)
    } else if raw >= 1_000.0 {
        format!("{:.2} µs", raw / 1_000.0)
    } else {
        format!("{:.0} ns", raw)
    }
}

/// Time one expression and return `(Measurement, result)`.
///
/// The result goes through `black_box` so the computation cannot be
/// discarded as dead code.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let result = std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), result)
    }};
}

/// Simple fast random shuffle using Fisher-Yates algorithm
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Simple seeded PRNG for reproducible benchmarks
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Generate f32 in range [-1.0, 1.0)
    pub fn next_f32_range(&mut self) -> f32 {
        let n = self.next_u64();
        (n >> 40) as f32 / (1u64 << 24) as f32 * 2.0 - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_deterministic() {
        let mut a = SeededRng::new(99);
        let mut b = SeededRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_next_f32_range_bounds() {
        let mut rng = SeededRng::new(1);
        for _ in 0..1000 {
            let v = rng.next_f32_range();
            assert!((-1.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut values: Vec<u32> = (0..64).collect();
        shuffle(&mut values, 7);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<u32>>());
    }

    #[test]
    fn test_measure_macro_returns_result() {
        let (_, result) = crate::measure!(2 + 2);
        assert_eq!(result, 4);
    }
}
