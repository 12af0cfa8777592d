//! Units of measure for cuboid dimensions.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length unit used for construction input and textual output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Meters (the storage unit).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meter,
    /// Centimeters.
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    /// Millimeters.
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
}

impl Unit {
    /// All supported units.
    pub const ALL: [Unit; 3] = [Unit::Meter, Unit::Centimeter, Unit::Millimeter];

    /// Multiplier converting a value in this unit to meters.
    pub fn to_meters(self) -> f64 {
        match self {
            Unit::Meter => 1.0,
            Unit::Centimeter => 0.01,
            Unit::Millimeter => 0.001,
        }
    }

    /// Multiplier converting a value in meters to this unit.
    pub fn per_meter(self) -> f64 {
        match self {
            Unit::Meter => 1.0,
            Unit::Centimeter => 100.0,
            Unit::Millimeter => 1000.0,
        }
    }

    /// Fixed number of decimal places used when printing in this unit.
    pub fn precision(self) -> usize {
        match self {
            Unit::Meter => 3,
            Unit::Centimeter => 1,
            Unit::Millimeter => 0,
        }
    }

    /// Short symbol (`m`, `cm`, `mm`).
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Centimeter => "cm",
            Unit::Millimeter => "mm",
        }
    }

    /// Looks up a unit by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m" => Some(Unit::Meter),
            "cm" => Some(Unit::Centimeter),
            "mm" => Some(Unit::Millimeter),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts either the symbol or the full English name, case-insensitively.
impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Unit::Meter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Unit::Centimeter)
            }
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(Unit::Millimeter)
            }
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}
