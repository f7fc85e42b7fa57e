//! CPU cycle counter for precise micro-benchmarking.
//!
//! Architecture-specific counter reads for x86_64 and aarch64.

/// Read the current CPU cycle counter / timer.
///
/// On x86_64: RDTSC fenced with LFENCE so speculation cannot reorder it.
/// On aarch64: CNTVCT_EL0, the userspace-accessible virtual timer (fixed
/// frequency, not true cycles, but consistent across cores).
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_cycles_x86_64()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cycles_aarch64()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86_64 or aarch64; build with --features use_time");
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles_x86_64() -> u64 {
    use core::arch::x86_64::*;
    unsafe {
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles_aarch64() -> u64 {
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cycles_monotonic() {
        let c1 = read_cycles();
        let c2 = read_cycles();

        // Roughly monotonic; CNTVCT_EL0 resolution may be low
        assert!(c2 >= c1 || c1 - c2 < 1000);
    }
}
