use crate::bounding_volume::Aabb;
use crate::math::{HomogeneousMatrix, Point, Vector};
use crate::shape::Cuboid;
use crate::utils::Placement;

impl Cuboid {
    /// Computes the AABB of this cuboid transformed by `pos`, expressed in the frame `pos`
    /// maps into.
    #[inline]
    pub fn aabb(&self, pos: &Placement) -> Aabb {
        let center = Point::from(pos.translation);
        let ws_half_extents = pos.absolute_transform_vector(&self.half_extents);

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// Computes the local-space AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.half_extents);

        Aabb::new(-half_extents, half_extents)
    }
}

/// Computes the AABB bounding a box of half-extents `half_extents` after it has been moved
/// by the homogeneous transform `xform`.
///
/// The result is expressed in the box's original (untransformed) frame: it fully
/// contains the transformed box. Its half-extent along axis `i` is
/// `Σ_j half_extents[j] * |M_ij|` where `M` is the rotation block of `xform`, and its
/// center is the translated origin.
///
/// The rotation block is used as-is (it is not renormalized).
pub fn aabb_from_obb(half_extents: &Vector, xform: &HomogeneousMatrix) -> Aabb {
    Cuboid::new(*half_extents).aabb(&Placement::from_homogeneous_unchecked(xform))
}

/// Same as [`aabb_from_obb`], but the box is first moved by `relative` before being
/// transformed by `xform`, i.e., the bounded box is `xform * relative * box`.
///
/// This is typically used to bound a box against a copy of itself after
/// applying some motion.
pub fn aabb_from_obb_with_relative(
    half_extents: &Vector,
    xform: &HomogeneousMatrix,
    relative: &Placement,
) -> Aabb {
    let pos = Placement::from_homogeneous_unchecked(xform) * *relative;
    Cuboid::new(*half_extents).aabb(&pos)
}
