//! Collector + vectorized FMA strategy for the corner-weighted sum.
//!
//! Areas and weights were cached in parallel arrays at collector build time;
//! the kernel combines each pair with a fused multiply-add.

use crate::kernel;
use crate::shapes::CornerCollector;

pub fn corner_weighted_area_collector(collector: &CornerCollector) -> f32 {
    kernel::weighted_sum_f32(&collector.areas, &collector.weights)
}
