//! The string to color pipeline behind a validated palette.

use crate::config::PaletteConfig;
use crate::error::Result;
use crate::hash::{bkdr_hash, bkdr_hash_bytes, bkdr_hash_utf16};
use crate::hex::rgb_to_hex;
use crate::hsl::{select_hsl_unchecked, Hsl};
use crate::rgb::Rgb;

/// Deterministic color generator.
///
/// Holds a palette that has passed [`PaletteConfig::validate`], so every
/// method on `&str` input is infallible. Cheap to clone and safe to share
/// across threads.
///
/// # Examples
/// ```
/// use impress_colorhash::{ColorHash, PaletteConfig};
///
/// let colors = ColorHash::default();
/// assert_eq!(colors.hex("Hello World"), "#8796c5");
///
/// let muted = ColorHash::new(PaletteConfig::new().with_saturation_levels([0.2])).unwrap();
/// assert_eq!(muted.hsl("Hello World").hue, colors.hsl("Hello World").hue);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorHash {
    palette: PaletteConfig,
}

impl ColorHash {
    /// Create a generator, rejecting empty or out-of-range palettes.
    pub fn new(palette: PaletteConfig) -> Result<Self> {
        palette.validate()?;
        Ok(Self { palette })
    }

    /// The palette this generator selects from.
    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }

    /// Raw hash of `text`.
    pub fn hash(&self, text: &str) -> u64 {
        bkdr_hash(text)
    }

    /// Hue, saturation and lightness for `text`.
    pub fn hsl(&self, text: &str) -> Hsl {
        self.hsl_from_hash(bkdr_hash(text))
    }

    /// RGB channels for `text`.
    pub fn rgb(&self, text: &str) -> Rgb {
        self.hsl(text).into()
    }

    /// `#rrggbb` for `text`.
    pub fn hex(&self, text: &str) -> String {
        rgb_to_hex(self.rgb(text))
    }

    /// HSL for UTF-16 input; unpaired surrogates are an encoding error.
    ///
    /// [`rgb_utf16`](Self::rgb_utf16) and [`hex_utf16`](Self::hex_utf16)
    /// decode the same way.
    pub fn hsl_utf16(&self, units: &[u16]) -> Result<Hsl> {
        Ok(self.hsl_from_hash(bkdr_hash_utf16(units)?))
    }

    /// RGB channels for UTF-16 input.
    pub fn rgb_utf16(&self, units: &[u16]) -> Result<Rgb> {
        Ok(self.hsl_utf16(units)?.into())
    }

    /// `#rrggbb` for UTF-16 input.
    pub fn hex_utf16(&self, units: &[u16]) -> Result<String> {
        Ok(rgb_to_hex(self.rgb_utf16(units)?))
    }

    /// HSL for UTF-8 bytes; malformed sequences are an encoding error.
    ///
    /// [`rgb_bytes`](Self::rgb_bytes) and [`hex_bytes`](Self::hex_bytes)
    /// decode the same way.
    pub fn hsl_bytes(&self, bytes: &[u8]) -> Result<Hsl> {
        Ok(self.hsl_from_hash(bkdr_hash_bytes(bytes)?))
    }

    /// RGB channels for UTF-8 bytes.
    pub fn rgb_bytes(&self, bytes: &[u8]) -> Result<Rgb> {
        Ok(self.hsl_bytes(bytes)?.into())
    }

    /// `#rrggbb` for UTF-8 bytes.
    pub fn hex_bytes(&self, bytes: &[u8]) -> Result<String> {
        Ok(rgb_to_hex(self.rgb_bytes(bytes)?))
    }

    fn hsl_from_hash(&self, hash: u64) -> Hsl {
        let hsl = select_hsl_unchecked(hash, &self.palette);
        tracing::trace!("hash {} -> {}", hash, hsl);
        hsl
    }
}
