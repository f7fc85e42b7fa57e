//! Shape value model.
//!
//! Two representations of the same four shape kinds coexist and must stay
//! numerically equivalent:
//!
//! - **Polymorphic**: one struct per kind behind the [`Shape`] trait,
//!   aggregated as `Box<dyn Shape>`. Adding a kind means adding one
//!   implementor; existing kinds are never touched.
//! - **Flat**: [`FlatShape`], a tagged record `{kind, width, height}` whose
//!   field meaning is fixed per kind (see [`FlatShape`] docs). This is what
//!   the branch and table strategies iterate.

pub mod collector;
pub mod dataset;

pub use collector::{AreaCollector, CornerCollector};
pub use dataset::ShapeDataset;

/// Common capability interface for all shape kinds.
///
/// Both methods are pure functions of the stored dimensions. Dimensions are
/// assumed non-negative and finite; anything else yields IEEE-754
/// garbage-in/garbage-out results, never a fault.
pub trait Shape {
    /// Surface area of the shape.
    fn area(&self) -> f32;

    /// Number of corners (0 for curved shapes).
    fn corner_count(&self) -> u32;
}

pub struct Square {
    pub side: f32,
}

impl Shape for Square {
    fn area(&self) -> f32 {
        self.side * self.side
    }

    fn corner_count(&self) -> u32 {
        4
    }
}

pub struct Rectangle {
    pub width: f32,
    pub height: f32,
}

impl Shape for Rectangle {
    fn area(&self) -> f32 {
        self.width * self.height
    }

    fn corner_count(&self) -> u32 {
        4
    }
}

pub struct Triangle {
    pub base: f32,
    pub height: f32,
}

impl Shape for Triangle {
    fn area(&self) -> f32 {
        0.5 * self.base * self.height
    }

    fn corner_count(&self) -> u32 {
        3
    }
}

pub struct Circle {
    pub radius: f32,
}

impl Shape for Circle {
    fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    fn corner_count(&self) -> u32 {
        0
    }
}

/// Closed enumeration of shape kinds.
///
/// The ordinal doubles as the index into the coefficient tables of the
/// table-dispatch strategy, so the discriminants are fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ShapeKind {
    Square = 0,
    Rectangle = 1,
    Triangle = 2,
    Circle = 3,
}

/// Number of shape kinds (table sizes depend on this).
pub const KIND_COUNT: usize = 4;

impl ShapeKind {
    /// Ordinal of this kind, usable as a table index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Corner count of this kind (same values the trait implementors return).
    pub fn corner_count(self) -> u32 {
        match self {
            ShapeKind::Square => 4,
            ShapeKind::Rectangle => 4,
            ShapeKind::Triangle => 3,
            ShapeKind::Circle => 0,
        }
    }
}

/// Flat tagged record used by the branch and table strategies.
///
/// Field meaning is kind-dependent and part of this type's contract:
///
/// | kind      | `width`  | `height` |
/// |-----------|----------|----------|
/// | Square    | side     | side     |
/// | Rectangle | width    | height   |
/// | Triangle  | base     | height   |
/// | Circle    | radius   | radius   |
///
/// Square and Circle duplicate their single dimension into both fields.
/// The table strategy relies on this: every area must factor as
/// `coefficient * width * height`, which only holds because of the
/// duplication. A future kind with more than two independent dimensions
/// (e.g. a Heron's-formula triangle) cannot satisfy this and would break the
/// table strategy; that is a known limitation of the flat encoding, not
/// something the constructors guard against.
#[derive(Clone, Copy, Debug)]
pub struct FlatShape {
    pub kind: ShapeKind,
    pub width: f32,
    pub height: f32,
}

impl FlatShape {
    pub fn square(side: f32) -> Self {
        Self {
            kind: ShapeKind::Square,
            width: side,
            height: side,
        }
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            width,
            height,
        }
    }

    pub fn triangle(base: f32, height: f32) -> Self {
        Self {
            kind: ShapeKind::Triangle,
            width: base,
            height,
        }
    }

    pub fn circle(radius: f32) -> Self {
        Self {
            kind: ShapeKind::Circle,
            width: radius,
            height: radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_close(a: f32, b: f32, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_square() {
        let s = Square { side: 3.0 };
        assert_close(s.area(), 9.0, "square area");
        assert_eq!(s.corner_count(), 4);
    }

    #[test]
    fn test_rectangle() {
        let r = Rectangle {
            width: 3.0,
            height: 4.0,
        };
        assert_close(r.area(), 12.0, "rectangle area");
        assert_eq!(r.corner_count(), 4);
    }

    #[test]
    fn test_triangle() {
        let t = Triangle {
            base: 3.0,
            height: 4.0,
        };
        assert_close(t.area(), 6.0, "triangle area");
        assert_eq!(t.corner_count(), 3);
    }

    #[test]
    fn test_circle() {
        let c = Circle { radius: 3.0 };
        assert_close(c.area(), 9.0 * std::f32::consts::PI, "circle area");
        assert_eq!(c.corner_count(), 0);
    }

    #[test]
    fn test_kind_ordinals_are_table_indices() {
        assert_eq!(ShapeKind::Square.index(), 0);
        assert_eq!(ShapeKind::Rectangle.index(), 1);
        assert_eq!(ShapeKind::Triangle.index(), 2);
        assert_eq!(ShapeKind::Circle.index(), 3);
    }

    #[test]
    fn test_flat_encoding_duplicates_single_dimension() {
        let sq = FlatShape::square(3.0);
        assert_eq!(sq.width, sq.height);

        let ci = FlatShape::circle(2.5);
        assert_eq!(ci.width, ci.height);
    }

    #[test]
    fn test_kind_corner_counts_match_trait() {
        let shapes: [(Box<dyn Shape>, ShapeKind); 4] = [
            (Box::new(Square { side: 1.0 }), ShapeKind::Square),
            (
                Box::new(Rectangle {
                    width: 1.0,
                    height: 1.0,
                }),
                ShapeKind::Rectangle,
            ),
            (
                Box::new(Triangle {
                    base: 1.0,
                    height: 1.0,
                }),
                ShapeKind::Triangle,
            ),
            (Box::new(Circle { radius: 1.0 }), ShapeKind::Circle),
        ];
        for (shape, kind) in &shapes {
            assert_eq!(shape.corner_count(), kind.corner_count());
        }
    }
}
