//! Definition of the quad shape and of its dissection into triangles.

use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// A quadrilateral given by its four vertices, in order.
///
/// A quad is generally expected to be planar. Use [`Quad::is_coplanar`] to check it
/// and [`Quad::dissect`] to split it into two triangles.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Quad {
    /// The quad first point.
    pub a: Point,
    /// The quad second point.
    pub b: Point,
    /// The quad third point.
    pub c: Point,
    /// The quad fourth point.
    pub d: Point,
}

/// The two triangles resulting from the dissection of a [`Quad`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct QuadDissection {
    /// The first triangle.
    ///
    /// If the quad is skew, this is always the triangle made of its first three
    /// vertices and it can be relied upon.
    pub first: Triangle,
    /// The second triangle.
    ///
    /// If the quad is skew, this triangle (vertices 0, 2 and 3) does not lie on the
    /// plane of `first`.
    pub second: Triangle,
    /// `true` if the quad is skew, i.e., its four vertices are not coplanar.
    pub degenerate: bool,
}

impl QuadDissection {
    /// Both triangles of this dissection.
    #[inline]
    pub fn triangles(&self) -> [Triangle; 2] {
        [self.first, self.second]
    }
}

impl From<[Point; 4]> for Quad {
    fn from(arr: [Point; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl Quad {
    /// Creates a quad from four points.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Quad {
        Quad { a, b, c, d }
    }

    /// The four vertices of this quad.
    #[inline]
    pub fn vertices(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// A vector normal to this quad, computed as the cross product of its diagonals.
    ///
    /// For a planar, simple quad, its length is twice the area of the quad.
    #[inline]
    pub fn scaled_normal(&self) -> Vector {
        (self.c - self.a).cross(&(self.d - self.b))
    }

    /// The area of this quad, assuming it is planar and simple.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// Tests if the fourth vertex lies within `tolerance` of the plane of the first three.
    ///
    /// If the first three vertices are collinear, they don't define a plane and the
    /// quad is always considered coplanar.
    pub fn is_coplanar(&self, tolerance: Real) -> bool {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let n = ab.cross(&ac);
        let n_norm = n.norm();

        if n_norm <= crate::math::DEFAULT_EPSILON * ab.norm_squared().max(ac.norm_squared()) {
            return true;
        }

        n.dot(&(self.d - self.a)).abs() <= tolerance * n_norm
    }

    /// Splits this quad into two triangles along one of its diagonals.
    ///
    /// For a planar quad, the diagonal is chosen so that both triangles lie inside of
    /// the quad: the 0-2 diagonal, giving triangles `(0, 1, 2)` and `(0, 2, 3)`, unless
    /// the quad is concave at vertex 1 or 3 in which case the 1-3 diagonal, giving
    /// `(1, 2, 3)` and `(1, 3, 0)`, is used.
    ///
    /// For a skew quad (see [`Quad::is_coplanar`]), the 0-2 diagonal is always used and
    /// the result is flagged as `degenerate`: the first triangle is exact but the
    /// second one does not lie on its plane.
    pub fn dissect(&self, tolerance: Real) -> QuadDissection {
        if !self.is_coplanar(tolerance) {
            log::debug!("Dissecting a skew quad: {:?}", self);
            return QuadDissection {
                first: Triangle::new(self.a, self.b, self.c),
                second: Triangle::new(self.a, self.c, self.d),
                degenerate: true,
            };
        }

        let n = self.scaled_normal();
        let s012 = (self.b - self.a).cross(&(self.c - self.a)).dot(&n);
        let s023 = (self.c - self.a).cross(&(self.d - self.a)).dot(&n);

        if s012 < 0.0 || s023 < 0.0 {
            let s123 = (self.c - self.b).cross(&(self.d - self.b)).dot(&n);
            let s130 = (self.d - self.b).cross(&(self.a - self.b)).dot(&n);

            if s123 >= 0.0 && s130 >= 0.0 {
                return QuadDissection {
                    first: Triangle::new(self.b, self.c, self.d),
                    second: Triangle::new(self.b, self.d, self.a),
                    degenerate: false,
                };
            }
        }

        QuadDissection {
            first: Triangle::new(self.a, self.b, self.c),
            second: Triangle::new(self.a, self.c, self.d),
            degenerate: false,
        }
    }
}
