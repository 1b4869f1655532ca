//! Bit-width helpers.
//!
//! Every function takes the storage width explicitly, so a single code path
//! serves 8-, 16-, 32-, 64-bit words and any odd width in between. Widths
//! are expected to have passed [`check_width`] first.

use crate::error::{MapperError, Result};

/// Widest supported storage word.
pub const MAX_WIDTH: u32 = 64;

/// Validate a storage width (1..=64).
pub fn check_width(width: u32) -> Result<u32> {
    if width == 0 || width > MAX_WIDTH {
        return Err(MapperError::UnsupportedWidth(width));
    }
    Ok(width)
}

/// `2^width`. Held in a `u128` because `2^64` does not fit in a `u64`.
pub fn group_size(width: u32) -> u128 {
    debug_assert!(width >= 1 && width <= MAX_WIDTH);
    1u128 << width
}

/// Largest value representable in `width` bits (`2^width - 1`).
pub fn max_value(width: u32) -> u64 {
    (group_size(width) - 1) as u64
}

/// Mask selecting the low `width` bits.
pub fn width_mask(width: u32) -> u64 {
    max_value(width)
}

/// Reduce a signed integer into the unsigned `width`-bit domain by
/// two's-complement wraparound, i.e. `value mod 2^width`.
pub fn wrap_to_width(value: i128, width: u32) -> u64 {
    // i128 -> u128 keeps the two's-complement bit pattern; masking then
    // takes the residue.
    (value as u128 & (group_size(width) - 1)) as u64
}

/// Reinterpret the low `width` bits of `value` as a two's-complement
/// signed integer of the same width.
///
/// Top bit clear: the value is returned unchanged. Top bit set: the result
/// is `value - 2^width`.
pub fn to_signed(value: u64, width: u32) -> i64 {
    let masked = value & width_mask(width);
    let top_bit = 1u64 << (width - 1);
    if masked & top_bit == 0 {
        masked as i64
    } else {
        (masked as i128 - group_size(width) as i128) as i64
    }
}

/// Truncate toward zero. Saturates at the `i128` range; NaN maps to 0.
pub fn truncate_toward_zero(product: f64) -> i128 {
    product.trunc() as i128
}
