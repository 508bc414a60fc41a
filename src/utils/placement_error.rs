use crate::math::Real;

/// Error returned by [`Placement::from_homogeneous`] when a homogeneous matrix does not
/// describe a rigid motion (a rotation followed by a translation).
///
/// The overlap tests themselves never validate their inputs; this error only exists
/// for callers that want to check a matrix once, before feeding it to many tests.
///
/// [`Placement::from_homogeneous`]: crate::utils::Placement::from_homogeneous
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PlacementError {
    /// At least one entry of the matrix is NaN or infinite.
    #[error("the homogeneous matrix contains a non-finite entry.")]
    NonFinite,
    /// The bottom row of the matrix is not `[0, 0, 0, 1]`.
    #[error("the last row of the homogeneous matrix is not [0, 0, 0, 1].")]
    NotAffine,
    /// The upper-left 3x3 block is not orthonormal.
    #[error("the rotation block is not orthonormal (deviation: {deviation}).")]
    NotOrthonormal {
        /// The largest absolute entry of `RᵀR - I`.
        deviation: Real,
    },
    /// The upper-left 3x3 block is orthonormal but mirrors space.
    #[error("the rotation block is a reflection (determinant: {determinant}).")]
    Reflection {
        /// The determinant of the rotation block.
        determinant: Real,
    },
}
