//! Command-line support for U-Cuboid.
//!
//! This crate provides:
//! - Report rendering (plain text and JSON)
//! - The sample set used by the `demo` command

mod demo;
mod report;

pub use demo::demo_samples;
pub use report::CuboidReport;
