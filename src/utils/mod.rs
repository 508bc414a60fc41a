//! Rigid placements and related utilities.

pub use self::placement::Placement;
pub use self::placement_error::PlacementError;

mod placement;
mod placement_error;
