//! HSL selection from a hash value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::PaletteConfig;
use crate::error::Result;

/// Modulus for the hue digit. One less than a full turn, so 359° is never produced.
pub const HUE_MODULUS: u64 = 359;

/// Divisor that strips the hue digit off the hash.
const HUE_DIVISOR: u64 = 360;

/// Hue in whole degrees, saturation and lightness as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Hsl {
    pub hue: u32,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue,
            percent(self.saturation),
            percent(self.lightness)
        )
    }
}

fn percent(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 100.0
}

/// Split a hash into hue, saturation and lightness.
///
/// The hash is consumed as a mixed-radix number: the hue comes from
/// `hash % 359`, then the quotient by 360 supplies a saturation index and,
/// after dividing by the saturation count, a lightness index.
///
/// Returns `InvalidConfig` for an empty or out-of-range palette.
pub fn select_hsl(hash: u64, palette: &PaletteConfig) -> Result<Hsl> {
    palette.validate()?;
    Ok(select_hsl_unchecked(hash, palette))
}

/// [`select_hsl`] for a palette that has already passed validation.
pub(crate) fn select_hsl_unchecked(hash: u64, palette: &PaletteConfig) -> Hsl {
    let saturation_count = palette.saturation_levels.len() as u64;
    let lightness_count = palette.lightness_levels.len() as u64;

    let hue = (hash % HUE_MODULUS) as u32;
    let remaining = hash / HUE_DIVISOR;
    let saturation = palette.saturation_levels[(remaining % saturation_count) as usize];
    let remaining = remaining / saturation_count;
    let lightness = palette.lightness_levels[(remaining % lightness_count) as usize];

    Hsl {
        hue,
        saturation,
        lightness,
    }
}
