/// Selects the set of axes tested by the separating-axis based overlap tests.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SatMode {
    /// Test every candidate axis, including the 9 edge-edge cross products.
    ///
    /// The result is exact (up to the tolerance and floating-point rounding).
    #[default]
    Full,
    /// Test only the face normals, skipping the 9 edge-edge cross products.
    ///
    /// This does roughly 2 to 3 times less work but may report an overlap for shapes that
    /// are actually disjoint. It never misses an actual overlap. For box-box tests, false
    /// positives have been observed empirically in about 15% of the disjoint-but-close
    /// configurations; this figure is a heuristic, not a guarantee.
    Lite,
}

impl SatMode {
    /// Is this the approximate, cheaper, mode?
    #[inline]
    pub fn is_lite(self) -> bool {
        self == SatMode::Lite
    }
}

/// Selects how boxes placed by world transforms are compared.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundingMode {
    /// Compare the oriented boxes themselves with the separating axis theorem.
    #[default]
    Obb,
    /// Compare the first box against the axis-aligned box (in the frame of the first box)
    /// bounding the second one. Conservative: never misses an overlap, but may report
    /// overlaps for disjoint boxes.
    Aabb,
}
