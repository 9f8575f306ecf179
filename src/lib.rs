//! shapekit - 2D geometry kernel for interactive drawing tools
//!
//! Plain value types (points, vectors, rectangles, circles, segments and
//! polygons) together with the queries an editor needs: containment,
//! intersection, area and centroid, convex hull and polyline simplification.
//! Everything is generic over [`num_traits::Float`] and compares with an
//! explicit tolerance rather than exact equality.
//!
//! # Example
//!
//! ```
//! use shapekit::{Circle2, Intersects, Point2, Rect2};
//!
//! let c = Circle2::new(Point2::new(0.0, 0.0), 5.0);
//! let r = Rect2::new(3.0, 3.0, 4.0, 4.0);
//!
//! assert!(c.contains_point(Point2::new(3.0, 4.0)));
//! assert!(c.intersects(&r));
//! ```

pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod scalar;
pub mod simplify;

pub use error::{GeomError, Result};
pub use polygon::Polygon;
pub use primitives::{Circle2, Intersects, Planar, Point2, Rect2, Segment2, Vec2};
