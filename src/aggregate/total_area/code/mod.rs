//! Total-area strategy implementations.

mod branch;
mod collector;
mod dynamic;
mod table;

pub use branch::{area_branch, total_area_branch, total_area_branch_unrolled};
pub use collector::total_area_collector;
pub use dynamic::{total_area_dynamic, total_area_dynamic_unrolled};
pub use table::{area_table, total_area_table, total_area_table_unrolled, AREA_COEFFS};

use crate::aggregate::StrategyFn;
use crate::utils::VariantInfo;

/// All total-area strategies, reference (dynamic dispatch) first.
pub fn available_strategies() -> Vec<VariantInfo<StrategyFn>> {
    vec![
        VariantInfo {
            name: "dynamic",
            description: "Virtual dispatch over boxed trait objects",
            function: StrategyFn::Dynamic(total_area_dynamic),
        },
        VariantInfo {
            name: "dynamic-unrolled",
            description: "Virtual dispatch with 4 independent accumulators",
            function: StrategyFn::Dynamic(total_area_dynamic_unrolled),
        },
        VariantInfo {
            name: "branch",
            description: "Match on the kind tag, formula inline",
            function: StrategyFn::Flat(total_area_branch),
        },
        VariantInfo {
            name: "branch-unrolled",
            description: "Branch dispatch with 4 independent accumulators",
            function: StrategyFn::Flat(total_area_branch_unrolled),
        },
        VariantInfo {
            name: "table",
            description: "Coefficient table indexed by kind ordinal",
            function: StrategyFn::Flat(total_area_table),
        },
        VariantInfo {
            name: "table-unrolled",
            description: "Table dispatch with 4 independent accumulators",
            function: StrategyFn::Flat(total_area_table_unrolled),
        },
        VariantInfo {
            name: "collector-simd",
            description: "Precomputed area array reduced by the SIMD kernel",
            function: StrategyFn::Areas(total_area_collector),
        },
    ]
}
