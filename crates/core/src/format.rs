//! Textual formatting of cuboids.
//!
//! Edges are printed in input order as `<value> <unit>` terms joined by
//! [`SEPARATOR`], with a fixed precision per unit: 3 decimals for meters,
//! 1 for centimeters and none for millimeters. Midpoints round away from
//! zero (`62.5 mm` prints as `63 mm`). The decimal separator is always `.`.

use crate::cuboid::Cuboid;
use crate::unit::Unit;
use crate::{Error, Result};
use std::fmt;

/// Separator placed between the three terms.
pub const SEPARATOR: &str = " × ";

/// Display adapter printing a cuboid in a chosen unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitDisplay<'a> {
    cuboid: &'a Cuboid,
    unit: Unit,
}

impl fmt::Display for UnitDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.unit.per_meter();
        let precision = self.unit.precision();
        let symbol = self.unit.symbol();

        for (i, value) in self.cuboid.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            let rounded = round_half_away(value * scale, precision);
            write!(f, "{:.*} {}", precision, rounded, symbol)?;
        }
        Ok(())
    }
}

/// Rounds to `decimals` places with midpoints going away from zero.
///
/// `{:.N}` alone resolves exact binary ties to even, so the value is rounded
/// here first and the formatter only pads the digits.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

impl Cuboid {
    /// Returns a display adapter printing this cuboid in `unit`.
    pub fn display_in(&self, unit: Unit) -> UnitDisplay<'_> {
        UnitDisplay { cuboid: self, unit }
    }

    /// Formats the cuboid using a unit code (`m`, `cm` or `mm`).
    ///
    /// An empty code selects meters.
    pub fn format(&self, code: &str) -> Result<String> {
        let code = if code.is_empty() { "m" } else { code };
        let unit =
            Unit::from_symbol(code).ok_or_else(|| Error::UnsupportedFormat(code.to_string()))?;
        Ok(self.display_in(unit).to_string())
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_in(Unit::Meter).fmt(f)
    }
}
