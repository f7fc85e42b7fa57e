//! Correctness tests for the corner-weighted-area strategies.

#[cfg(test)]
mod tests {
    use crate::aggregate::corner_weighted::code::*;
    use crate::shapes::ShapeDataset;
    use crate::utils::bench::SeededRng;

    /// 9·0.2 + 12·0.2 + 6·0.25 + 9π·1.0 for the round-robin quartet.
    const QUARTET_WEIGHTED: f32 = 1.8 + 2.4 + 1.5 + 9.0 * std::f32::consts::PI;

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
    fn test_empty_input_yields_zero() {
        let dataset = ShapeDataset::round_robin(0);
        for strategy in available_strategies() {
            assert_eq!(
                strategy.function.eval(&dataset),
                0.0,
                "empty input must sum to 0.0 for '{}'",
                strategy.name
            );
        }
    }

    #[test]
    fn test_round_robin_quartet() {
        let dataset = ShapeDataset::round_robin(4);
        for strategy in available_strategies() {
            assert_close(
                strategy.function.eval(&dataset),
                QUARTET_WEIGHTED,
                strategy.name,
            );
        }
    }

    #[test]
    fn test_strategies_agree_on_unaligned_length() {
        let mut rng = SeededRng::new(456);
        let dataset = ShapeDataset::random(1023, &mut rng);
        let reference: f32 = dataset
            .shapes
            .iter()
            .map(|s| s.area() / (1.0 + s.corner_count() as f32))
            .sum();

        for strategy in available_strategies() {
            assert_close(strategy.function.eval(&dataset), reference, strategy.name);
        }
    }

    #[test]
    fn test_idempotent() {
        let dataset = ShapeDataset::round_robin(100);
        for strategy in available_strategies() {
            let first = strategy.function.eval(&dataset);
            let second = strategy.function.eval(&dataset);
            assert_eq!(first, second, "'{}' mutated shared state", strategy.name);
        }
    }

    #[test]
    fn test_per_kind_weights() {
        // Square weight 0.2, Rectangle 0.2, Triangle 0.25, Circle 1.0
        let dataset = ShapeDataset::round_robin(4);
        let expected = [9.0 * 0.2, 12.0 * 0.2, 6.0 * 0.25, 9.0 * std::f32::consts::PI];
        for (record, want) in dataset.flat.iter().zip(expected) {
            assert_close(corner_weighted_branch(record), want, "branch weight");
            assert_close(corner_weighted_table(record), want, "table weight");
        }
    }

    #[test]
    fn test_unrolled_variants_handle_remainders() {
        for count in [1, 2, 3, 5, 7] {
            let dataset = ShapeDataset::round_robin(count);
            let reference = corner_weighted_area_dynamic(&dataset.shapes);
            assert_close(
                corner_weighted_area_dynamic_unrolled(&dataset.shapes),
                reference,
                &format!("dynamic-unrolled at count {}", count),
            );
            assert_close(
                corner_weighted_area_branch_unrolled(&dataset.flat),
                reference,
                &format!("branch-unrolled at count {}", count),
            );
            assert_close(
                corner_weighted_area_table_unrolled(&dataset.flat),
                reference,
                &format!("table-unrolled at count {}", count),
            );
        }
    }
}
