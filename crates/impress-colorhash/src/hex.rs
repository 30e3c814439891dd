//! `#rrggbb` formatting.

use std::fmt;

use crate::rgb::Rgb;

/// Render an RGB triple as `#` plus six lowercase hex digits.
///
/// # Examples
/// ```
/// use impress_colorhash::{rgb_to_hex, Rgb};
/// assert_eq!(rgb_to_hex(Rgb::new(5, 171, 255)), "#05abff");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

impl Rgb {
    /// Same as [`rgb_to_hex`].
    pub fn to_hex(&self) -> String {
        rgb_to_hex(*self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
