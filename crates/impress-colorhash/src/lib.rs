//! impress-colorhash: Deterministic colors from strings.
//!
//! Maps any piece of text (a tag path, an author name, a collection title) to
//! a stable color without storing anything. The same string always yields the
//! same color on every platform; different strings are likely to land on
//! visibly different colors.
//!
//! # Pipeline
//!
//! ```text
//! text ──hash──▶ u64 ──select_hsl──▶ Hsl ──hsl_to_rgb──▶ Rgb ──rgb_to_hex──▶ "#rrggbb"
//! ```
//!
//! - [`hash`]: modified BKDR rolling hash over code points, kept inside 2^53
//! - [`hsl`](mod@hsl): hue from `hash % 359`, saturation and lightness from palettes
//! - [`rgb`](mod@rgb): standard HSL to RGB transform, rounded half away from zero
//! - [`hex`](mod@hex): lowercase, zero-padded `#rrggbb`
//!
//! # Example
//!
//! ```
//! use impress_colorhash::{hex, hsl, rgb, Rgb};
//!
//! assert_eq!(hex("Hello World"), "#8796c5");
//! assert_eq!(rgb("Hello World"), Rgb::new(135, 150, 197));
//! assert_eq!(hsl("Hello World").hue, 225);
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

use lazy_static::lazy_static;

pub mod color_hash;
pub mod config;
pub mod error;
pub mod hash;
pub mod hex;
pub mod hsl;
pub mod rgb;

pub use color_hash::*;
pub use config::*;
pub use error::*;
pub use hash::*;
pub use hex::*;
pub use hsl::*;
pub use rgb::*;

lazy_static! {
    static ref DEFAULT_COLOR_HASH: ColorHash = ColorHash::default();
}

/// HSL for `text` with the default palette.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn hsl(text: &str) -> Hsl {
    DEFAULT_COLOR_HASH.hsl(text)
}

/// RGB for `text` with the default palette.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn rgb(text: &str) -> Rgb {
    DEFAULT_COLOR_HASH.rgb(text)
}

/// `#rrggbb` for `text` with the default palette.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn hex(text: &str) -> String {
    DEFAULT_COLOR_HASH.hex(text)
}

/// HSL for `text` with a caller-supplied palette.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn hsl_with(text: &str, palette: PaletteConfig) -> std::result::Result<Hsl, ColorHashError> {
    Ok(ColorHash::new(palette)?.hsl(text))
}

/// RGB for `text` with a caller-supplied palette.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn rgb_with(text: &str, palette: PaletteConfig) -> std::result::Result<Rgb, ColorHashError> {
    Ok(ColorHash::new(palette)?.rgb(text))
}

/// `#rrggbb` for `text` with a caller-supplied palette.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn hex_with(text: &str, palette: PaletteConfig) -> std::result::Result<String, ColorHashError> {
    Ok(ColorHash::new(palette)?.hex(text))
}
