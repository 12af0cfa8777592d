//! Report rendering for cuboids.

use serde::Serialize;
use u_cuboid_core::{Cuboid, Unit};

/// Summary of a cuboid as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct CuboidReport {
    /// Formatted edges in the requested unit.
    pub text: String,
    /// Unit used for `text`.
    pub unit: Unit,
    /// Edges in meters, in input order.
    pub meters: Cuboid,
    /// Volume in cubic meters.
    pub volume_m3: f64,
    /// Surface area in square meters.
    pub surface_area_m2: f64,
}

impl CuboidReport {
    /// Builds a report for `cuboid` printed in `unit`.
    pub fn new(cuboid: &Cuboid, unit: Unit) -> Self {
        Self {
            text: cuboid.display_in(unit).to_string(),
            unit,
            meters: *cuboid,
            volume_m3: cuboid.volume(),
            surface_area_m2: cuboid.surface_area(),
        }
    }

    /// Renders the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report as aligned plain text.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n  volume:       {} m³\n  surface area: {} m²",
            self.text, self.volume_m3, self.surface_area_m2
        )
    }
}
