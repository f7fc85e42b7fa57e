//! Collector + vectorized reduction strategy.
//!
//! The dynamic-dispatch cost was already paid once when the collector was
//! built; this strategy is nothing but a data-parallel sum over the cached
//! area array.

use crate::kernel;
use crate::shapes::AreaCollector;

pub fn total_area_collector(collector: &AreaCollector) -> f32 {
    kernel::sum_f32(&collector.areas)
}
