//! Core polygon type and basic operations.

use crate::error::{GeomError, Result};
use crate::hull::convex_hull;
use crate::predicates::{orient2d, point_on_segment, Orientation};
use crate::primitives::{Planar, Point2, Rect2, Segment2, Vec2};
use crate::scalar::{cast, default_tolerance};
use crate::simplify::single_pass;
use num_traits::Float;

/// A polygon represented as an ordered sequence of vertices.
///
/// The polygon owns its vertex storage outright: every constructor and
/// mutator copies the incoming points, so nothing outside can alias a
/// stored vertex.
///
/// A polygon is *closed* when it has more than two vertices and the last
/// one repeats the first. Open polygons are legal; area, centroid,
/// containment and convexity treat them as implicitly wrapping from the
/// last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Creates a polygon by copying the given vertices.
    #[inline]
    pub fn from_slice(vertices: &[Point2<F>]) -> Self {
        Self {
            vertices: vertices.to_vec(),
        }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of stored vertices, including a closing duplicate.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the stored vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Returns a copy of the vertex at `index`.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Point2<F>> {
        self.vertices.get(index).copied()
    }

    /// Consumes the polygon, returning its vertex list.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        self.vertices
    }

    /// Appends a vertex.
    #[inline]
    pub fn push(&mut self, vertex: Point2<F>) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Inserts a vertex before `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, vertex: Point2<F>) -> Result<()> {
        if index > self.vertices.len() {
            return Err(self.out_of_bounds(index));
        }
        self.vertices.insert(index, vertex);
        Ok(())
    }

    /// Removes and returns the vertex at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Point2<F>> {
        if index >= self.vertices.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.vertices.remove(index))
    }

    /// Replaces the vertex at `index`.
    ///
    /// # Returns
    ///
    /// The vertex that was replaced, so the edit can be reverted by calling
    /// `set` again with it.
    ///
    /// # Errors
    ///
    /// [`GeomError::IndexOutOfBounds`] when `index >= len()`. The polygon is
    /// left unchanged.
    pub fn set(&mut self, index: usize, vertex: Point2<F>) -> Result<Point2<F>> {
        let len = self.vertices.len();
        match self.vertices.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, vertex)),
            None => Err(GeomError::IndexOutOfBounds { index, len }),
        }
    }

    fn out_of_bounds(&self, index: usize) -> GeomError {
        GeomError::IndexOutOfBounds {
            index,
            len: self.vertices.len(),
        }
    }

    /// Returns `true` if there are more than two vertices and the last one
    /// repeats the first within `eps`.
    pub fn is_closed_eps(&self, eps: F) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(&first), Some(&last)) if self.vertices.len() > 2 => first.approx_eq(last, eps),
            _ => false,
        }
    }

    /// [`is_closed_eps`](Self::is_closed_eps) with the default tolerance.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed_eps(default_tolerance())
    }

    /// Closes the polygon by repeating the first vertex at the end.
    ///
    /// Does nothing if it is already closed or has fewer than 3 vertices.
    /// Returns `true` if a vertex was appended.
    pub fn close(&mut self) -> bool {
        if self.vertices.len() < 3 || self.is_closed() {
            return false;
        }
        let first = self.vertices[0];
        self.vertices.push(first);
        true
    }

    /// Vertices of the ring, without the closing duplicate.
    fn ring(&self) -> &[Point2<F>] {
        if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }

    /// Returns the edges in vertex order.
    ///
    /// An open polygon with three or more vertices gains a closing edge from
    /// the last vertex back to the first; a closed one already has it.
    pub fn edges(&self) -> Vec<Segment2<F>> {
        polygon_edges(self.ring())
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(self.ring())
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the total length of all edges.
    pub fn perimeter(&self) -> F {
        self.edges()
            .into_iter()
            .fold(F::zero(), |acc, edge| acc + edge.length())
    }

    /// Returns the centroid (center of mass) of the polygon.
    ///
    /// Falls back to the mean of the vertices for fewer than three
    /// vertices or a near-zero area. `None` only when empty.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(self.ring())
    }

    /// Tests if a point is inside the polygon (even-odd rule).
    ///
    /// Points on the boundary may return either true or false; use
    /// [`point_on_boundary`](Self::point_on_boundary) for an inclusive test.
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        polygon_contains(self.ring(), point)
    }

    /// Returns `true` if `point` lies within `tolerance` of any edge.
    pub fn point_on_boundary(&self, point: Point2<F>, tolerance: F) -> bool {
        self.edges()
            .into_iter()
            .any(|edge| point_on_segment(point, edge, tolerance))
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(self.ring())
    }

    /// Returns the bounding box, or `None` if the polygon is empty.
    pub fn bounding_box(&self) -> Option<Rect2<F>> {
        Rect2::bounding(self.vertices.iter().copied())
    }

    /// Returns the convex hull of the vertices as an open CCW polygon.
    pub fn convex_hull(&self) -> Self {
        Self::new(convex_hull(&self.vertices))
    }

    /// Returns a simplified copy using a single forward sweep.
    ///
    /// See [`simplify::single_pass`](crate::simplify::single_pass) for the
    /// exact rule. The first and last vertices are always kept, so a closed
    /// polygon stays closed.
    pub fn simplify(&self, tolerance: F) -> Self {
        Self::new(single_pass(&self.vertices, tolerance))
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) -> &mut Self {
        if self.signed_area() < F::zero() {
            self.reverse();
        }
        self
    }

    /// Reverses the vertex order in place.
    #[inline]
    pub fn reverse(&mut self) -> &mut Self {
        self.vertices.reverse();
        self
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut out = self.clone();
        out.reverse();
        out
    }

    /// Moves every vertex by `offset` in place.
    pub fn translate(&mut self, offset: Vec2<F>) -> &mut Self {
        for v in &mut self.vertices {
            *v += offset;
        }
        self
    }

    /// Returns the polygon moved by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        let mut out = self.clone();
        out.translate(offset);
        out
    }

    /// Rotates every vertex by `angle` radians around `pivot` in place.
    pub fn rotate_around(&mut self, angle: F, pivot: Point2<F>) -> &mut Self {
        for v in &mut self.vertices {
            *v = v.rotated_around(angle, pivot);
        }
        self
    }

    /// Returns the polygon rotated by `angle` radians around `pivot`.
    pub fn rotated_around(&self, angle: F, pivot: Point2<F>) -> Self {
        let mut out = self.clone();
        out.rotate_around(angle, pivot);
        out
    }

    /// Scales every vertex's offset from `pivot` by `factor` in place.
    pub fn scale_around(&mut self, factor: F, pivot: Point2<F>) -> &mut Self {
        for v in &mut self.vertices {
            *v = pivot + (*v - pivot) * factor;
        }
        self
    }

    /// Returns the polygon scaled by `factor` around `pivot`.
    pub fn scaled_around(&self, factor: F, pivot: Point2<F>) -> Self {
        let mut out = self.clone();
        out.scale_around(factor, pivot);
        out
    }

    /// Returns `true` if both polygons have the same vertex count and each
    /// pair of vertices matches within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: F) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(a, b)| a.approx_eq(*b, eps))
    }

    /// [`approx_eq`](Self::approx_eq) with the default tolerance.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.approx_eq(other, default_tolerance())
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }
}

/// Returns the edges of a vertex ring, wrapping from the last vertex to
/// the first when there are at least three vertices.
pub fn polygon_edges<F: Float>(vertices: &[Point2<F>]) -> Vec<Segment2<F>> {
    let n = vertices.len();
    match n {
        0 | 1 => Vec::new(),
        2 => vec![Segment2::new(vertices[0], vertices[1])],
        _ => (0..n)
            .map(|i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
            .collect(),
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the centroid of a polygon.
///
/// Uses the area-weighted formula. For fewer than 3 vertices or a signed
/// area below `1e-10` in magnitude, returns the arithmetic mean of the
/// vertices instead. Returns `None` only for an empty slice.
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.is_empty() {
        return None;
    }

    let area = polygon_signed_area(vertices);
    if vertices.len() < 3 || area.abs() < default_tolerance() {
        return Some(vertex_mean(vertices));
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let cross = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        cx = cx + (vertices[i].x + vertices[j].x) * cross;
        cy = cy + (vertices[i].y + vertices[j].y) * cross;
    }

    let six_area = area * cast::<F>(6.0);
    Some(Point2::new(cx / six_area, cy / six_area))
}

fn vertex_mean<F: Float>(vertices: &[Point2<F>]) -> Point2<F> {
    let sum = vertices
        .iter()
        .fold(Vec2::zero(), |acc, v| acc + v.to_vec());
    let count: F = cast(vertices.len() as f64);
    Point2::new(sum.x / count, sum.y / count)
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// Walks every consecutive vertex triple (wrapping around) and compares the
/// turn directions. Collinear turns are ignored; the polygon is convex when
/// no two remaining turns disagree. Fewer than 3 vertices is not convex.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let n = vertices.len();
    let eps = default_tolerance();
    let mut sign: Option<Orientation> = None;

    for i in 0..n {
        let turn = orient2d(
            vertices[i],
            vertices[(i + 1) % n],
            vertices[(i + 2) % n],
            eps,
        );
        if turn == Orientation::Collinear {
            continue;
        }
        match sign {
            None => sign = Some(turn),
            Some(s) if s != turn => return false,
            _ => {}
        }
    }

    true
}
