//! Floating-point geometric primitives and operations.

mod circle2;
mod planar;
mod point2;
mod rect2;
mod segment2;
mod vec2;

pub use circle2::Circle2;
pub use planar::Planar;
pub use point2::Point2;
pub use rect2::Rect2;
pub use segment2::Segment2;
pub use vec2::Vec2;

/// Overlap test between two shapes.
///
/// Implemented for every pair the kernel knows how to compare:
/// circle/circle, circle/rectangle (both ways), rectangle/rectangle,
/// segment/segment and polygon/polygon. Boundary contact counts as
/// intersecting unless the implementing type documents otherwise.
pub trait Intersects<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` share at least one point.
    fn intersects(&self, other: &Rhs) -> bool;
}
