//! Collector staging structures.
//!
//! A collector walks the polymorphic shape sequence exactly once, paying the
//! dynamic-dispatch cost for each `area()` / `corner_count()` call a single
//! time, and caches the results in flat parallel arrays. The reduction
//! kernel then consumes those arrays read-only any number of times.

use super::Shape;

/// Flat array of precomputed areas, index-aligned with the source sequence.
#[derive(Default)]
pub struct AreaCollector {
    pub areas: Vec<f32>,
}

impl AreaCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            areas: Vec::with_capacity(capacity),
        }
    }

    /// Record one shape's area. Calls `area()` exactly once.
    pub fn add_shape(&mut self, shape: &dyn Shape) {
        self.areas.push(shape.area());
    }

    /// Build a collector from a full polymorphic sequence in one pass.
    pub fn from_shapes(shapes: &[Box<dyn Shape>]) -> Self {
        let mut collector = Self::with_capacity(shapes.len());
        for shape in shapes {
            collector.add_shape(shape.as_ref());
        }
        collector
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Parallel arrays of precomputed areas and corner weights.
///
/// `weights[i] == 1 / (1 + corner_count_i)` for the shape at index `i`.
/// Both arrays always have the same length; construction is the only place
/// that writes them.
#[derive(Default)]
pub struct CornerCollector {
    pub areas: Vec<f32>,
    pub weights: Vec<f32>,
}

impl CornerCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            areas: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Record one shape's area and corner weight. Calls `area()` and
    /// `corner_count()` exactly once each.
    pub fn add_shape(&mut self, shape: &dyn Shape) {
        let area = shape.area();
        let corner_count = shape.corner_count();
        let weight = 1.0 / (1.0 + corner_count as f32);

        self.areas.push(area);
        self.weights.push(weight);
    }

    /// Build a collector from a full polymorphic sequence in one pass.
    pub fn from_shapes(shapes: &[Box<dyn Shape>]) -> Self {
        let mut collector = Self::with_capacity(shapes.len());
        for shape in shapes {
            collector.add_shape(shape.as_ref());
        }
        collector
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.areas.len(), self.weights.len());
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Square, Triangle};

    fn sample_shapes() -> Vec<Box<dyn Shape>> {
        vec![
            Box::new(Square { side: 3.0 }),
            Box::new(Rectangle {
                width: 3.0,
                height: 4.0,
            }),
            Box::new(Triangle {
                base: 3.0,
                height: 4.0,
            }),
            Box::new(Circle { radius: 3.0 }),
        ]
    }

    #[test]
    fn test_area_collector_indices_align() {
        let shapes = sample_shapes();
        let collector = AreaCollector::from_shapes(&shapes);

        assert_eq!(collector.len(), shapes.len());
        for (i, shape) in shapes.iter().enumerate() {
            assert_eq!(collector.areas[i], shape.area());
        }
    }

    #[test]
    fn test_corner_collector_invariants() {
        let shapes = sample_shapes();
        let collector = CornerCollector::from_shapes(&shapes);

        assert_eq!(collector.areas.len(), shapes.len());
        assert_eq!(collector.weights.len(), shapes.len());
        for (i, shape) in shapes.iter().enumerate() {
            assert_eq!(collector.areas[i], shape.area());
            assert_eq!(
                collector.weights[i],
                1.0 / (1.0 + shape.corner_count() as f32)
            );
        }
    }

    #[test]
    fn test_corner_weights_per_kind() {
        let shapes = sample_shapes();
        let collector = CornerCollector::from_shapes(&shapes);

        // Square, Rectangle, Triangle, Circle in order
        assert_eq!(collector.weights, vec![0.2, 0.2, 0.25, 1.0]);
    }

    #[test]
    fn test_empty_collectors() {
        let shapes: Vec<Box<dyn Shape>> = Vec::new();
        assert!(AreaCollector::from_shapes(&shapes).is_empty());
        assert!(CornerCollector::from_shapes(&shapes).is_empty());
    }
}
