//! Sample cuboids for the `demo` command.

use u_cuboid_core::{Cuboid, Result, Unit};

/// Builds a small mixed-unit collection of cuboids.
pub fn demo_samples() -> Result<Vec<Cuboid>> {
    Ok(vec![
        Cuboid::default(),
        Cuboid::from_meters(2.192, 1.442, 3.123)?,
        Cuboid::builder()
            .with_b(3140.0)
            .with_a(5125.0)
            .with_unit(Unit::Millimeter)
            .build()?,
        Cuboid::new(Some(10.0), Some(20.0), Some(30.0), Unit::Centimeter)?,
        Cuboid::from_millimeters(100, 200, 300)?,
    ])
}
