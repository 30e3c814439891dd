//! HSL to RGB conversion.

use serde::{Deserialize, Serialize};

use crate::hsl::Hsl;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub const fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.as_array()
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness)
    }
}

/// Convert HSL to RGB with the standard piecewise transform.
///
/// `hue` is in degrees, `saturation` and `lightness` in [0, 1]. Channels are
/// scaled to 255 and rounded half away from zero (`f64::round`), then clamped
/// to [0, 255] to absorb float error.
pub fn hsl_to_rgb(hue: u32, saturation: f64, lightness: f64) -> Rgb {
    let h = f64::from(hue) / 360.0;
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Rgb {
        r: channel(p, q, h + 1.0 / 3.0),
        g: channel(p, q, h),
        b: channel(p, q, h - 1.0 / 3.0),
    }
}

fn channel(p: f64, q: f64, seed: f64) -> u8 {
    let mut t = seed;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    let value = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    };

    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
