//! Owned polygons and the slice-level routines behind them.
//!
//! [`Polygon`] stores its vertices in a `Vec` and may be open or closed
//! (first vertex repeated at the end). The free functions operate on a raw
//! vertex ring and treat it as wrapping from the last vertex to the first.
//!
//! # Example
//!
//! ```
//! use shapekit::{Intersects, Point2, Polygon, Rect2};
//!
//! let a = Polygon::rectangle(Rect2::new(0.0_f64, 0.0, 2.0, 2.0));
//! let b = Polygon::regular(Point2::new(2.0_f64, 2.0), 1.0, 6).unwrap();
//!
//! assert!(a.intersects(&b));
//! assert!((a.area() - 4.0).abs() < 1e-10);
//! ```

mod core;
mod intersect;
mod shapes;

pub use core::{
    polygon_area, polygon_centroid, polygon_contains, polygon_edges, polygon_is_convex,
    polygon_signed_area, Polygon,
};
