//! # Shape-Area-Bench
//!
//! Micro-benchmarks comparing four ways of aggregating areas over a large
//! collection of simple shapes: virtual dispatch over trait objects, inline
//! branching on a kind tag, coefficient-table lookup, and a precompute +
//! SIMD-reduce "collector" pipeline.

pub mod aggregate;
pub mod kernel;
pub mod registry;
pub mod shapes;
pub mod utils;

/// Re-export tui from utils for convenience
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::aggregate::{corner_weighted, total_area};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::shapes::{Shape, ShapeDataset};
}
