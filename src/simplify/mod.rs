//! Polyline and polygon simplification.
//!
//! Two strategies are offered:
//! - [`single_pass`]: one forward sweep that judges each vertex against the
//!   last kept vertex and its successor. This is what
//!   [`Polygon::simplify`](crate::Polygon::simplify) uses.
//! - [`rdp`]: classic Ramer-Douglas-Peucker, which re-examines removed spans
//!   and generally keeps a more faithful outline.

mod rdp;
mod single_pass;

pub use rdp::{rdp, rdp_indices};
pub use single_pass::{single_pass, single_pass_indices};
