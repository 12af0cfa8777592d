//! # U-Cuboid Core
//!
//! Unit-aware rectangular box value type.
//!
//! A [`Cuboid`] holds three edges in meters, each within
//! `[0.001, 10.0)`. It can be built from meters, centimeters or
//! millimeters, printed and parsed in any of those units, compared
//! independently of edge order, stacked with another cuboid and compressed
//! into an equal-volume cube.
//!
//! ## Core Components
//!
//! - **Value type**: [`Cuboid`], [`CuboidBuilder`]
//! - **Units**: [`Unit`]
//! - **Text**: `Display`/[`Cuboid::format`] and `FromStr`/[`Cuboid::parse`]
//! - **Operations**: [`Cuboid::combine`], [`Cuboid::compress`]
//! - **Ordering**: [`ordering::volume_order`] for sorting collections
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod cuboid;
pub mod error;
pub mod format;
pub mod ops;
pub mod ordering;
pub mod parse;
pub mod unit;

// Re-exports
pub use cuboid::{
    round_half_even, Cuboid, CuboidBuilder, DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION,
};
pub use error::{Error, Result};
pub use format::UnitDisplay;
pub use ordering::{sort_by_volume, volume_order};
pub use parse::ParseOptions;
pub use unit::Unit;
