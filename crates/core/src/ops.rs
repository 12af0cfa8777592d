//! Operations producing new cuboids from existing ones.

use crate::cuboid::Cuboid;
use crate::Result;
use std::ops::Add;

impl Cuboid {
    /// Returns the container obtained by stacking `self` and `other` along
    /// their shortest edges.
    ///
    /// Both edge sets are sorted descending; the result takes the larger of
    /// each pair of longest and middle edges and the sum of the shortest.
    /// The result is validated like any other cuboid, so stacking two boxes
    /// whose combined short edges reach the upper bound fails.
    pub fn combine(&self, other: &Cuboid) -> Result<Cuboid> {
        let x = descending(self);
        let y = descending(other);

        let a = x[0].max(y[0]);
        let b = x[1].max(y[1]);
        let c = x[2] + y[2];

        log::debug!("combining {} with {} into ({}, {}, {})", self, other, a, b, c);
        Cuboid::from_meters(a, b, c)
    }

    /// Returns the cube with the same volume.
    pub fn compress(&self) -> Result<Cuboid> {
        let edge = self.volume().cbrt();
        log::debug!("compressing {} to a cube with edge {}", self, edge);
        Cuboid::from_meters(edge, edge, edge)
    }
}

fn descending(cuboid: &Cuboid) -> [f64; 3] {
    let mut sorted = cuboid.sorted_dimensions();
    sorted.reverse();
    sorted
}

impl Add for &Cuboid {
    type Output = Result<Cuboid>;

    fn add(self, rhs: &Cuboid) -> Result<Cuboid> {
        self.combine(rhs)
    }
}

impl Add for Cuboid {
    type Output = Result<Cuboid>;

    fn add(self, rhs: Cuboid) -> Result<Cuboid> {
        self.combine(&rhs)
    }
}
