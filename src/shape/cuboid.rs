//! Definition of the cuboid shape, i.e., a box given by its half-extents.

use crate::math::{Point, Vector};
use crate::utils::Placement;

/// Shape of a box, centered at the origin of its local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The eight vertices of this cuboid, transformed by `pos`.
    ///
    /// The i-th bit of the vertex index is set iff. the i-th local coordinate of the
    /// vertex is negative.
    pub fn vertices(&self, pos: &Placement) -> [Point; 8] {
        let mut res = [Point::origin(); 8];

        for (id, vtx) in res.iter_mut().enumerate() {
            let mut local = self.half_extents;

            for i in 0..3 {
                if id & (1 << i) != 0 {
                    local[i] = -local[i];
                }
            }

            *vtx = pos.transform_point(&Point::from(local));
        }

        res
    }
}
