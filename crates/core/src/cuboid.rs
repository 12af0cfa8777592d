//! The cuboid value type.

use crate::unit::Unit;
use crate::{Error, Result};
use nalgebra::Vector3;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted dimension, in meters (inclusive).
pub const MIN_DIMENSION: f64 = 0.001;

/// Upper dimension bound, in meters (exclusive).
pub const MAX_DIMENSION: f64 = 10.0;

/// Dimension used for any argument left unspecified, in meters.
pub const DEFAULT_DIMENSION: f64 = 0.1;

/// Decimal places kept by [`Cuboid::volume`].
pub const VOLUME_DECIMALS: i32 = 9;

/// Decimal places kept by [`Cuboid::surface_area`].
pub const AREA_DECIMALS: i32 = 6;

const DIMENSION_NAMES: [char; 3] = ['a', 'b', 'c'];

/// Rounds `value` to `decimals` places, resolving ties to the even neighbour.
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// An immutable rectangular box with three edges stored in meters.
///
/// Every edge lies in `[MIN_DIMENSION, MAX_DIMENSION)`. Edges keep the order
/// they were given in for indexing, iteration and formatting, while equality
/// and hashing compare them as an unordered set.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Cuboid {
    /// Edges (a, b, c) in meters.
    dimensions: Vector3<f64>,
}

impl Cuboid {
    /// Creates a cuboid from optional edges given in `unit`.
    ///
    /// Supplied edges are converted to meters first; omitted edges default to
    /// [`DEFAULT_DIMENSION`] meters regardless of `unit`.
    pub fn new(a: Option<f64>, b: Option<f64>, c: Option<f64>, unit: Unit) -> Result<Self> {
        let factor = unit.to_meters();
        let convert = |value: Option<f64>| value.map_or(DEFAULT_DIMENSION, |v| v * factor);

        let meters = [convert(a), convert(b), convert(c)];
        for (name, value) in DIMENSION_NAMES.iter().zip(meters) {
            validate(*name, value)?;
        }

        Ok(Self {
            dimensions: Vector3::new(meters[0], meters[1], meters[2]),
        })
    }

    /// Creates a cuboid from three edges in meters.
    pub fn from_meters(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::new(Some(a), Some(b), Some(c), Unit::Meter)
    }

    /// Creates a cuboid from three whole-millimeter edges.
    pub fn from_millimeters(a: i32, b: i32, c: i32) -> Result<Self> {
        Self::new(
            Some(f64::from(a)),
            Some(f64::from(b)),
            Some(f64::from(c)),
            Unit::Millimeter,
        )
    }

    /// Starts a builder for partially specified cuboids.
    pub fn builder() -> CuboidBuilder {
        CuboidBuilder::default()
    }

    /// Returns the edges (a, b, c) in meters.
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns edge a.
    pub fn a(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns edge b.
    pub fn b(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns edge c.
    pub fn c(&self) -> f64 {
        self.dimensions.z
    }

    /// Volume in cubic meters, rounded to 9 decimal places.
    pub fn volume(&self) -> f64 {
        let d = &self.dimensions;
        round_half_even(d.x * d.y * d.z, VOLUME_DECIMALS)
    }

    /// Surface area in square meters, rounded to 6 decimal places.
    pub fn surface_area(&self) -> f64 {
        let d = &self.dimensions;
        round_half_even(2.0 * (d.x * d.y + d.x * d.z + d.y * d.z), AREA_DECIMALS)
    }

    /// Sum of the three edges.
    pub fn dimension_sum(&self) -> f64 {
        self.dimensions.x + self.dimensions.y + self.dimensions.z
    }

    /// Returns the edges sorted ascending.
    pub fn sorted_dimensions(&self) -> [f64; 3] {
        let mut sorted = self.to_array();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Returns the edge at `index` (0 = a, 1 = b, 2 = c).
    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0..=2 => Ok(self.dimensions[index]),
            _ => Err(Error::IndexOutOfRange(index)),
        }
    }

    /// Iterates over a, b, c in input order.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    /// Returns the edges (a, b, c) as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.dimensions.x, self.dimensions.y, self.dimensions.z]
    }
}

fn validate(dimension: char, value: f64) -> Result<()> {
    if (MIN_DIMENSION..MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange { dimension, value })
    }
}

impl Default for Cuboid {
    /// The 10 cm cube.
    fn default() -> Self {
        Self {
            dimensions: Vector3::repeat(DEFAULT_DIMENSION),
        }
    }
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_dimensions() == other.sorted_dimensions()
    }
}

// Stored edges are always finite, so equality is reflexive.
impl Eq for Cuboid {}

impl Hash for Cuboid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.sorted_dimensions() {
            value.to_bits().hash(state);
        }
    }
}

impl Index<usize> for Cuboid {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `index > 2`. Use [`Cuboid::get`] for a checked lookup.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0..=2 => &self.dimensions[index],
            _ => panic!("{}", Error::IndexOutOfRange(index)),
        }
    }
}

impl IntoIterator for Cuboid {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Cuboid {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<[f64; 3]> for Cuboid {
    type Error = Error;

    fn try_from([a, b, c]: [f64; 3]) -> Result<Self> {
        Self::from_meters(a, b, c)
    }
}

impl From<Cuboid> for [f64; 3] {
    fn from(cuboid: Cuboid) -> Self {
        cuboid.to_array()
    }
}

/// Builder for cuboids with any subset of edges specified.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuboidBuilder {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    unit: Unit,
}

impl CuboidBuilder {
    /// Sets edge a.
    pub fn with_a(mut self, value: f64) -> Self {
        self.a = Some(value);
        self
    }

    /// Sets edge b.
    pub fn with_b(mut self, value: f64) -> Self {
        self.b = Some(value);
        self
    }

    /// Sets edge c.
    pub fn with_c(mut self, value: f64) -> Self {
        self.c = Some(value);
        self
    }

    /// Sets the unit the specified edges are given in.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Validates and builds the cuboid.
    pub fn build(self) -> Result<Cuboid> {
        Cuboid::new(self.a, self.b, self.c, self.unit)
    }
}
