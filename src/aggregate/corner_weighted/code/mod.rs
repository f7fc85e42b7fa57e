//! Corner-weighted-area strategy implementations.

mod branch;
mod collector;
mod dynamic;
mod table;

pub use branch::{
    corner_weighted_area_branch, corner_weighted_area_branch_unrolled, corner_weighted_branch,
};
pub use collector::corner_weighted_area_collector;
pub use dynamic::{corner_weighted_area_dynamic, corner_weighted_area_dynamic_unrolled};
pub use table::{
    corner_weighted_area_table, corner_weighted_area_table_unrolled, corner_weighted_table,
    CORNER_WEIGHTED_COEFFS,
};

use crate::aggregate::StrategyFn;
use crate::utils::VariantInfo;

/// All corner-weighted strategies, reference (dynamic dispatch) first.
pub fn available_strategies() -> Vec<VariantInfo<StrategyFn>> {
    vec![
        VariantInfo {
            name: "dynamic",
            description: "Virtual dispatch, weight recomputed per element",
            function: StrategyFn::Dynamic(corner_weighted_area_dynamic),
        },
        VariantInfo {
            name: "dynamic-unrolled",
            description: "Virtual dispatch with 4 independent accumulators",
            function: StrategyFn::Dynamic(corner_weighted_area_dynamic_unrolled),
        },
        VariantInfo {
            name: "branch",
            description: "Match on the kind tag, weight and formula inline",
            function: StrategyFn::Flat(corner_weighted_area_branch),
        },
        VariantInfo {
            name: "branch-unrolled",
            description: "Branch dispatch with 4 independent accumulators",
            function: StrategyFn::Flat(corner_weighted_area_branch_unrolled),
        },
        VariantInfo {
            name: "table",
            description: "Weight folded into the coefficient table",
            function: StrategyFn::Flat(corner_weighted_area_table),
        },
        VariantInfo {
            name: "table-unrolled",
            description: "Table dispatch with 4 independent accumulators",
            function: StrategyFn::Flat(corner_weighted_area_table_unrolled),
        },
        VariantInfo {
            name: "collector-simd",
            description: "Precomputed areas and weights reduced by the FMA kernel",
            function: StrategyFn::Weighted(corner_weighted_area_collector),
        },
    ]
}
