//! Ordering helpers for collections of cuboids.
//!
//! [`Cuboid`] has no intrinsic order; these functions rank boxes by size.

use crate::cuboid::Cuboid;
use std::cmp::Ordering;

/// Compares by volume, then surface area, then edge sum, all ascending.
pub fn volume_order(lhs: &Cuboid, rhs: &Cuboid) -> Ordering {
    lhs.volume()
        .total_cmp(&rhs.volume())
        .then_with(|| lhs.surface_area().total_cmp(&rhs.surface_area()))
        .then_with(|| lhs.dimension_sum().total_cmp(&rhs.dimension_sum()))
}

/// Sorts `cuboids` in place with [`volume_order`]. The sort is stable.
pub fn sort_by_volume(cuboids: &mut [Cuboid]) {
    cuboids.sort_by(volume_order);
}
