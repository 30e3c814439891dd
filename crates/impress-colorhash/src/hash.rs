//! Modified BKDR string hash.
//!
//! A polynomial rolling hash over Unicode scalar values. The accumulator is
//! reduced by integer division whenever the next multiply-add could leave the
//! 53-bit safe integer range, so the result is identical to what an
//! implementation restricted to IEEE doubles would compute.
//!
//! Every color this crate produces is derived from this value: changing any
//! constant here shifts every downstream color.

use crate::error::{ColorHashError, Result};

/// Multiplier folded into the accumulator on every step.
pub const PRIMARY_SEED: u64 = 131;

/// Divisor used to shrink the accumulator before it overflows.
pub const SECONDARY_SEED: u64 = 137;

/// Largest integer exactly representable in an IEEE 754 double (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Appended to every input so `"a"` and `"aa"` do not collide trivially.
pub const SENTINEL: char = 'x';

/// Accumulator ceiling; above this it is divided by [`SECONDARY_SEED`].
const REDUCE_ABOVE: u64 = MAX_SAFE_INTEGER / SECONDARY_SEED;

#[inline]
fn step(acc: u64, c: char) -> u64 {
    let acc = if acc > REDUCE_ABOVE { acc / SECONDARY_SEED } else { acc };
    acc * PRIMARY_SEED + u64::from(u32::from(c))
}

/// Hash a piece of text.
///
/// Iterates by code point, not by byte: `"日本語"` takes three steps plus the
/// sentinel.
///
/// # Examples
/// ```
/// use impress_colorhash::bkdr_hash;
/// assert_eq!(bkdr_hash(""), 120);
/// assert_eq!(bkdr_hash("a"), 12827);
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn bkdr_hash(text: &str) -> u64 {
    text.chars().chain(std::iter::once(SENTINEL)).fold(0, step)
}

/// Hash UTF-16 code units, failing on the first unpaired surrogate.
pub fn bkdr_hash_utf16(units: &[u16]) -> Result<u64> {
    let mut acc = 0;
    for (index, decoded) in char::decode_utf16(units.iter().copied()).enumerate() {
        let c = decoded.map_err(|e| {
            ColorHashError::Encoding(format!(
                "unpaired surrogate 0x{:04x} at code point {}",
                e.unpaired_surrogate(),
                index
            ))
        })?;
        acc = step(acc, c);
    }
    Ok(step(acc, SENTINEL))
}

/// Hash raw bytes that are expected to be UTF-8.
pub fn bkdr_hash_bytes(bytes: &[u8]) -> Result<u64> {
    Ok(bkdr_hash(decode_utf8(bytes)?))
}

/// Strict UTF-8 decoding; malformed input is an error, never U+FFFD.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        ColorHashError::Encoding(format!("invalid UTF-8 at byte {}", e.valid_up_to()))
    })
}
