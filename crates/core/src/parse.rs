//! Parsing cuboids from their textual form.
//!
//! The grammar mirrors the formatter: three `<number> <unit>` terms separated
//! by `×`. Each term may use its own unit.

use crate::cuboid::Cuboid;
use crate::unit::Unit;
use crate::{Error, Result};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character separating the three terms.
pub const TERM_SEPARATOR: char = '×';

/// Options controlling how lenient the parser is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseOptions {
    /// Treat an unparseable number as `0.0` instead of failing.
    ///
    /// A zero edge is then rejected by range validation, so malformed
    /// numbers surface as [`Error::OutOfRange`] rather than [`Error::Parse`].
    pub lenient_numbers: bool,
}

impl ParseOptions {
    /// Creates strict options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the zero fallback for malformed numbers.
    pub fn with_lenient_numbers(mut self, enabled: bool) -> Self {
        self.lenient_numbers = enabled;
        self
    }
}

impl Cuboid {
    /// Parses text such as `1.000 m × 2.000 m × 3.000 m` with strict options.
    pub fn parse(text: &str) -> Result<Cuboid> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses text using explicit options.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Cuboid> {
        let terms: Vec<&str> = text.split(TERM_SEPARATOR).map(str::trim).collect();
        if terms.len() != 3 {
            return Err(Error::Parse(format!(
                "expected 3 terms separated by '{}', found {} in {:?}",
                TERM_SEPARATOR,
                terms.len(),
                text
            )));
        }

        let mut meters = [0.0; 3];
        for (slot, term) in meters.iter_mut().zip(&terms) {
            *slot = parse_term(term, options)?;
        }

        Cuboid::from_meters(meters[0], meters[1], meters[2])
    }
}

/// Parses one `<number> <unit>` term into meters.
fn parse_term(term: &str, options: &ParseOptions) -> Result<f64> {
    let mut tokens = term.split_whitespace();
    let (number, symbol) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(number), Some(symbol), None) => (number, symbol),
        _ => {
            return Err(Error::Parse(format!(
                "expected '<value> <unit>', found {:?}",
                term
            )))
        }
    };

    let unit =
        Unit::from_symbol(symbol).ok_or_else(|| Error::UnsupportedFormat(symbol.to_string()))?;

    let value = match number.parse::<f64>() {
        Ok(value) => value,
        Err(_) if options.lenient_numbers => {
            log::warn!("unparseable number {:?} treated as 0", number);
            0.0
        }
        Err(e) => {
            return Err(Error::Parse(format!("invalid number {:?}: {}", number, e)));
        }
    };

    Ok(value * unit.to_meters())
}

impl FromStr for Cuboid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Cuboid::parse(s)
    }
}
