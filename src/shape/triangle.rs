//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils::Placement;

use na::Unit;

/// A triangle shape.
///
/// Besides its three vertices, a triangle caches its scaled normal `(b - a) × (c - a)`.
/// The normal is not normalized, and it is only kept up-to-date by the methods of this
/// type: after mutating a vertex directly, call [`Triangle::compute_normal`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point,
    /// The triangle second point.
    pub b: Point,
    /// The triangle third point.
    pub c: Point,
    normal: Vector,
}

impl From<[Point; 3]> for Triangle {
    fn from(arr: [Point; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points and computes its normal.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        let mut res = Triangle {
            a,
            b,
            c,
            normal: Vector::zeros(),
        };
        res.compute_normal();
        res
    }

    /// Recomputes the cached normal from the current vertices.
    ///
    /// The normal is `(b - a) × (c - a)`, so it is zero for collinear points.
    #[inline]
    pub fn compute_normal(&mut self) {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        self.normal = ab.cross(&ac);
    }

    /// The cached, non-normalized normal of this triangle.
    ///
    /// Its length is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector {
        self.normal
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    ///
    /// The normal is undefined if twice the area of the triangle is smaller than
    /// `DEFAULT_EPSILON` times its squared longest edge, whatever the size of the triangle.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector> {
        Unit::try_new(self.normal, DEFAULT_EPSILON * self.longest_edge_squared_length())
    }

    /// The squared length of the longest edge of this triangle.
    #[inline]
    pub fn longest_edge_squared_length(&self) -> Real {
        self.edges_scaled_directions()
            .iter()
            .map(|e| e.norm_squared())
            .fold(0.0, Real::max)
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges scaled directions of this triangle: [B - A, C - B, A - C].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// Applies `p' = R * p + T` to every vertex.
    ///
    /// The normal is rotated along with the vertices instead of being recomputed,
    /// which is only valid because `placement.rotation` is assumed to be a pure
    /// rotation (no scaling nor shearing).
    #[inline]
    pub fn transform_by(&mut self, placement: &Placement) {
        self.a = placement.transform_point(&self.a);
        self.b = placement.transform_point(&self.b);
        self.c = placement.transform_point(&self.c);
        self.normal = placement.transform_vector(&self.normal);
    }

    /// Returns a new triangle with vertices transformed by `placement`.
    #[inline]
    pub fn transformed(&self, placement: &Placement) -> Self {
        let mut res = *self;
        res.transform_by(placement);
        res
    }

    /// Tests if this triangle has (almost) zero area.
    ///
    /// The triangle is considered degenerate if one of its vertices is at a distance
    /// smaller than `tolerance` from the line passing through the two others, or if
    /// its normal is too small to be normalized.
    pub fn is_degenerate(&self, tolerance: Real) -> bool {
        // height = 2 * area / base
        self.normal().is_none()
            || self.normal.norm() <= tolerance * self.longest_edge_squared_length().sqrt()
    }

    /// Computes the extents of this triangle on the given direction.
    ///
    /// This computes the min and max values of the dot products between each
    /// vertex of this triangle and `dir`.
    #[inline]
    pub fn extents_on_dir(&self, dir: &Vector) -> (Real, Real) {
        let a = self.a.coords.dot(dir);
        let b = self.b.coords.dot(dir);
        let c = self.c.coords.dot(dir);

        if a > b {
            if b > c {
                (c, a)
            } else if a > c {
                (b, a)
            } else {
                (b, c)
            }
        } else {
            // b >= a
            if a > c {
                (c, b)
            } else if b > c {
                (a, b)
            } else {
                (a, c)
            }
        }
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.normal.norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}
