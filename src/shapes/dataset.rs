//! Synthetic benchmark dataset.
//!
//! One dataset holds the same logical shapes in every representation a
//! strategy might need: boxed trait objects for dynamic dispatch, flat
//! records for the branch and table strategies, and prebuilt collectors for
//! the SIMD strategy. Shapes are immutable after construction, so all
//! representations stay equivalent for the dataset's lifetime.

use super::{
    AreaCollector, Circle, CornerCollector, FlatShape, Rectangle, Shape, Square, Triangle,
    KIND_COUNT,
};
use crate::utils::bench::SeededRng;

pub struct ShapeDataset {
    pub shapes: Vec<Box<dyn Shape>>,
    pub flat: Vec<FlatShape>,
    pub area_collector: AreaCollector,
    pub corner_collector: CornerCollector,
}

impl ShapeDataset {
    /// Build `count` shapes cycling through the four kinds in round-robin
    /// order (`kind = index % 4`) with the article's fixed dimensions:
    /// Square(3), Rectangle(3, 4), Triangle(3, 4), Circle(3).
    pub fn round_robin(count: usize) -> Self {
        Self::with_dims(count, |_| (3.0, 4.0))
    }

    /// Like [`round_robin`](Self::round_robin) but with seeded-random
    /// dimensions in `[0.5, 4.5)`, for verification runs where fixed
    /// dimensions could mask per-kind mistakes.
    pub fn random(count: usize, rng: &mut SeededRng) -> Self {
        Self::with_dims(count, |_| {
            (
                rng.next_f32_range() * 2.0 + 2.5,
                rng.next_f32_range() * 2.0 + 2.5,
            )
        })
    }

    /// Build with caller-chosen dimensions per index. The first component is
    /// the only dimension used by Square and Circle.
    pub fn with_dims(count: usize, mut dims: impl FnMut(usize) -> (f32, f32)) -> Self {
        let mut shapes: Vec<Box<dyn Shape>> = Vec::with_capacity(count);
        let mut flat = Vec::with_capacity(count);
        let mut area_collector = AreaCollector::with_capacity(count);
        let mut corner_collector = CornerCollector::with_capacity(count);

        for i in 0..count {
            let (a, b) = dims(i);
            let (boxed, record): (Box<dyn Shape>, FlatShape) = match i % KIND_COUNT {
                0 => (Box::new(Square { side: a }), FlatShape::square(a)),
                1 => (
                    Box::new(Rectangle {
                        width: a,
                        height: b,
                    }),
                    FlatShape::rectangle(a, b),
                ),
                2 => (
                    Box::new(Triangle { base: a, height: b }),
                    FlatShape::triangle(a, b),
                ),
                _ => (Box::new(Circle { radius: a }), FlatShape::circle(a)),
            };

            area_collector.add_shape(boxed.as_ref());
            corner_collector.add_shape(boxed.as_ref());
            shapes.push(boxed);
            flat.push(record);
        }

        Self {
            shapes,
            flat,
            area_collector,
            corner_collector,
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_round_robin_kind_order() {
        let dataset = ShapeDataset::round_robin(8);
        let expected = [
            ShapeKind::Square,
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
            ShapeKind::Circle,
        ];
        for (i, record) in dataset.flat.iter().enumerate() {
            assert_eq!(record.kind, expected[i % 4]);
        }
    }

    #[test]
    fn test_representations_agree() {
        let mut rng = SeededRng::new(42);
        let dataset = ShapeDataset::random(101, &mut rng);

        assert_eq!(dataset.flat.len(), dataset.shapes.len());
        assert_eq!(dataset.area_collector.len(), dataset.shapes.len());
        assert_eq!(dataset.corner_collector.len(), dataset.shapes.len());

        for (i, shape) in dataset.shapes.iter().enumerate() {
            assert_eq!(dataset.area_collector.areas[i], shape.area());
            assert_eq!(dataset.corner_collector.areas[i], shape.area());
        }
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = ShapeDataset::round_robin(0);
        assert!(dataset.is_empty());
        assert!(dataset.flat.is_empty());
        assert!(dataset.area_collector.is_empty());
    }
}
