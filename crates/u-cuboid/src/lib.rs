//! # U-Cuboid
//!
//! Unit-aware rectangular boxes with order-independent equality.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_cuboid::{Cuboid, Unit};
//!
//! let crate_box = Cuboid::new(Some(60.0), Some(40.0), Some(30.0), Unit::Centimeter)?;
//! let lid: Cuboid = "600 mm × 400 mm × 20 mm".parse()?;
//!
//! let packed = crate_box.combine(&lid)?;
//! assert_eq!(packed.format("cm")?, "60.0 cm × 40.0 cm × 32.0 cm");
//! # Ok::<(), u_cuboid::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core value type and operations.
pub use u_cuboid_core as core;

// Re-export commonly used types at root level
pub use u_cuboid_core::{
    sort_by_volume, volume_order, Cuboid, CuboidBuilder, Error, ParseOptions, Result, Unit,
};
