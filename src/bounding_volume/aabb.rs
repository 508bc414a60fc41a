//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners, expressed in some reference
/// frame. Its edges are parallel to the coordinate axes of that frame.
///
/// - **mins**: The point with the smallest coordinates on each axis
/// - **maxs**: The point with the largest coordinates on each axis
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, `mins.z ≤ maxs.z`
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point,
    /// The point with maximum coordinates.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// Does this AABB intersect `other`?
    ///
    /// Touching boxes are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Does this AABB intersect `other`, allowing a gap of at most `tolerance` along each axis?
    #[inline]
    pub fn intersects_with_tolerance(&self, other: &Aabb, tolerance: Real) -> bool {
        (0..3).all(|i| {
            self.mins[i] <= other.maxs[i] + tolerance && other.mins[i] <= self.maxs[i] + tolerance
        })
    }

    /// Does this AABB contain `other`?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Does this AABB contain the given point (expressed in the same frame)?
    #[inline]
    pub fn contains_local_point(&self, point: &Point) -> bool {
        (0..3).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// This AABB enlarged by `amount` along every direction.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }
}
