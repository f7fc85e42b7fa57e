//! Correctness tests for the total-area strategies.

#[cfg(test)]
mod tests {
    use crate::aggregate::total_area::code::*;
    use crate::shapes::ShapeDataset;
    use crate::utils::bench::SeededRng;

    /// 9 + 12 + 6 + 9π for the round-robin quartet with article dims.
    const QUARTET_TOTAL: f32 = 27.0 + 9.0 * std::f32::consts::PI;

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
                QUARTET_TOTAL,
                strategy.name,
            );
        }
    }

    #[test]
    fn test_strategies_agree_on_unaligned_length() {
        // 1023 is not divisible by 4, 8, or 64, so every unroll and SIMD
        // tail path runs.
        let mut rng = SeededRng::new(123);
        let dataset = ShapeDataset::random(1023, &mut rng);
        let reference: f32 = dataset.shapes.iter().map(|s| s.area()).sum();

        for strategy in available_strategies() {
            assert_close(strategy.function.eval(&dataset), reference, strategy.name);
        }
    }

    #[test]
    fn test_strategies_agree_on_arbitrary_dims() {
        use rand::Rng;

        let mut rng = rand::rng();
        let dataset = ShapeDataset::with_dims(257, |_| {
            (rng.random_range(0.5..4.5), rng.random_range(0.5..4.5))
        });
        let reference: f32 = dataset.shapes.iter().map(|s| s.area()).sum();

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
    fn test_single_shape() {
        let dataset = ShapeDataset::round_robin(1);
        for strategy in available_strategies() {
            assert_close(strategy.function.eval(&dataset), 9.0, strategy.name);
        }
    }

    #[test]
    fn test_unrolled_variants_handle_remainders() {
        for count in [1, 2, 3, 5, 7] {
            let dataset = ShapeDataset::round_robin(count);
            let reference = total_area_dynamic(&dataset.shapes);
            assert_close(
                total_area_dynamic_unrolled(&dataset.shapes),
                reference,
                &format!("dynamic-unrolled at count {}", count),
            );
            assert_close(
                total_area_branch_unrolled(&dataset.flat),
                reference,
                &format!("branch-unrolled at count {}", count),
            );
            assert_close(
                total_area_table_unrolled(&dataset.flat),
                reference,
                &format!("table-unrolled at count {}", count),
            );
        }
    }

    #[test]
    fn test_table_matches_branch_per_record() {
        let mut rng = SeededRng::new(321);
        let dataset = ShapeDataset::random(16, &mut rng);
        for record in &dataset.flat {
            assert_close(area_table(record), area_branch(record), "per-record area");
        }
    }
}
