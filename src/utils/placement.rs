use crate::math::{HomogeneousMatrix, Matrix, Point, Real, Vector};
use crate::utils::PlacementError;
use core::ops::Mul;
use na::Isometry3;

/// A rigid placement: a rotation matrix followed by a translation.
///
/// A placement maps points expressed in a local frame into its parent frame:
/// `p' = rotation * p + translation`. It is used to express the pose of one box (or
/// triangle) relative to another box, as well as the world pose of a box.
///
/// The rotation is stored as a plain 3x3 matrix rather than a unit quaternion so
/// that caller-provided matrices are used as-is. The rotation is assumed to be
/// orthonormal; nothing here renormalizes it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Placement {
    /// The rotational part of this placement.
    pub rotation: Matrix,
    /// The translational part of this placement.
    pub translation: Vector,
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

impl Placement {
    /// Creates a placement from its rotation matrix and translation.
    #[inline]
    pub fn new(rotation: Matrix, translation: Vector) -> Self {
        Placement {
            rotation,
            translation,
        }
    }

    /// The identity placement.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Matrix::identity(), Vector::zeros())
    }

    /// A pure translation.
    #[inline]
    pub fn from_translation(translation: Vector) -> Self {
        Self::new(Matrix::identity(), translation)
    }

    /// A pure rotation.
    #[inline]
    pub fn from_rotation(rotation: Matrix) -> Self {
        Self::new(rotation, Vector::zeros())
    }

    /// Extracts the rotation block and the translation column of a homogeneous matrix.
    ///
    /// No validation is performed: the bottom row is ignored and the upper-left
    /// 3x3 block is taken as-is.
    #[inline]
    pub fn from_homogeneous_unchecked(m: &HomogeneousMatrix) -> Self {
        Self::new(
            m.fixed_view::<3, 3>(0, 0).into_owned(),
            m.fixed_view::<3, 1>(0, 3).into_owned(),
        )
    }

    /// Extracts a placement from a homogeneous matrix, checking that it describes a
    /// rigid motion up to `tolerance`.
    pub fn from_homogeneous(
        m: &HomogeneousMatrix,
        tolerance: Real,
    ) -> Result<Self, PlacementError> {
        if !m.iter().all(|e| e.is_finite()) {
            log::debug!("Rejected homogeneous matrix with non-finite entries.");
            return Err(PlacementError::NonFinite);
        }

        let bottom = m.fixed_view::<1, 4>(3, 0);
        if bottom[0].abs() > tolerance
            || bottom[1].abs() > tolerance
            || bottom[2].abs() > tolerance
            || (bottom[3] - 1.0).abs() > tolerance
        {
            log::debug!("Rejected projective homogeneous matrix: {}", bottom);
            return Err(PlacementError::NotAffine);
        }

        let placement = Self::from_homogeneous_unchecked(m);
        let deviation =
            (placement.rotation.transpose() * placement.rotation - Matrix::identity()).amax();
        if deviation > tolerance {
            log::debug!("Rejected non-orthonormal rotation block (deviation: {}).", deviation);
            return Err(PlacementError::NotOrthonormal { deviation });
        }

        let determinant = placement.rotation.determinant();
        if determinant < 0.0 {
            log::debug!("Rejected reflection (determinant: {}).", determinant);
            return Err(PlacementError::Reflection { determinant });
        }

        Ok(placement)
    }

    /// The homogeneous matrix equivalent to this placement.
    pub fn to_homogeneous(&self) -> HomogeneousMatrix {
        let mut res = HomogeneousMatrix::identity();
        res.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.rotation);
        res.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        res
    }

    /// The inverse of this placement, assuming its rotation is orthonormal.
    #[inline]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self::new(rotation, -(rotation * self.translation))
    }

    /// Computes `self.inverse() * rhs`.
    #[inline]
    pub fn inv_mul(&self, rhs: &Placement) -> Self {
        let inv_rot = self.rotation.transpose();
        Self::new(
            inv_rot * rhs.rotation,
            inv_rot * (rhs.translation - self.translation),
        )
    }

    /// Transforms a point by this placement.
    #[inline]
    pub fn transform_point(&self, pt: &Point) -> Point {
        Point::from(self.rotation * pt.coords + self.translation)
    }

    /// Rotates a vector by this placement (the translation is ignored).
    #[inline]
    pub fn transform_vector(&self, v: &Vector) -> Vector {
        self.rotation * v
    }

    /// Transforms a point by the inverse of this placement.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point) -> Point {
        Point::from(self.rotation.tr_mul(&(pt.coords - self.translation)))
    }

    /// Rotates a vector by the inverse of this placement.
    #[inline]
    pub fn inverse_transform_vector(&self, v: &Vector) -> Vector {
        self.rotation.tr_mul(v)
    }

    /// The component-wise absolute value of the rotation matrix.
    #[inline]
    pub fn absolute_rotation(&self) -> Matrix {
        self.rotation.abs()
    }

    /// Transforms a vector by the component-wise absolute value of the rotation matrix.
    ///
    /// Applied to half-extents, this gives the half-extents of the tightest
    /// axis-aligned box containing the rotated box.
    #[inline]
    pub fn absolute_transform_vector(&self, v: &Vector) -> Vector {
        self.absolute_rotation() * v
    }
}

impl Mul<Placement> for Placement {
    type Output = Placement;

    #[inline]
    fn mul(self, rhs: Placement) -> Placement {
        Placement::new(
            self.rotation * rhs.rotation,
            self.rotation * rhs.translation + self.translation,
        )
    }
}

impl<'a> Mul<&'a Placement> for &'a Placement {
    type Output = Placement;

    #[inline]
    fn mul(self, rhs: &'a Placement) -> Placement {
        *self * *rhs
    }
}

impl From<Isometry3<Real>> for Placement {
    fn from(iso: Isometry3<Real>) -> Self {
        Placement::new(
            iso.rotation.to_rotation_matrix().into_inner(),
            iso.translation.vector,
        )
    }
}
