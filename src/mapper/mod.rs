//! Fixed-point mapping between `f64` values and `W`-bit unsigned words.
//!
//! MPC arithmetic runs over the group of integers modulo `2^W`. Real inputs
//! are scaled by a divisor, truncated toward zero and wrapped into that
//! group; outputs are divided by the same divisor, either as unsigned
//! magnitudes or after two's-complement reinterpretation.
//!
//! # Precision
//!
//! While `|input * divisor| <= 2^W`, `decode_unsigned(encode(x))` for a
//! nonnegative `x` recovers the input up to precision loss:
//!
//! 1. When `|x| >= 1.0`, the RELATIVE loss is less than `|x| / divisor`.
//! 2. When `|x| < 1.0`, the ABSOLUTE loss is less than `1 / divisor`.
//!
//! Beyond that range the value wraps. [`FixedPointMapper::encode`] still
//! returns a result (and emits a rate-limited warning), while
//! [`FixedPointMapper::encode_checked`] refuses the input.

pub mod array;
pub mod typed;

pub use typed::{FixedWord, TypedMapper};

use std::time::Duration;

use crate::diagnostics::{ThrottleStats, WarnThrottle, DEFAULT_WARN_INTERVAL};
use crate::error::{MapperError, Result};
use crate::math::bits::{
    check_width, group_size, max_value, to_signed, truncate_toward_zero, width_mask, wrap_to_width,
};

/// Converts between `f64` values and `W`-bit unsigned fixed-point words.
///
/// # Example
///
/// ```rust
/// use number_mapper::FixedPointMapper;
///
/// let mapper = FixedPointMapper::new(8, 100).unwrap();
///
/// assert_eq!(mapper.encode(1.5), 150);
/// assert_eq!(mapper.decode_unsigned(150), 1.5);
/// assert_eq!(mapper.decode_signed(150), -1.06);
/// ```
#[derive(Clone, Debug)]
pub struct FixedPointMapper {
    width: u32,
    divisor: u64,
    throttle: WarnThrottle,
}

impl FixedPointMapper {
    /// Create a mapper for `width`-bit words scaled by `divisor`.
    ///
    /// Fails if `width` is outside 1..=64, or if `divisor` is zero or
    /// larger than `2^width - 1`.
    pub fn new(width: u32, divisor: u64) -> Result<Self> {
        Self::with_warn_interval(width, divisor, DEFAULT_WARN_INTERVAL)
    }

    /// Like [`new`](Self::new), with a custom window between two precision
    /// warnings.
    pub fn with_warn_interval(width: u32, divisor: u64, warn_interval: Duration) -> Result<Self> {
        let width = check_width(width)?;
        let divisor = validate_divisor(width, divisor)?;
        tracing::debug!(width, divisor, "created fixed-point mapper");
        Ok(Self {
            width,
            divisor,
            throttle: WarnThrottle::new(warn_interval),
        })
    }

    /// Create a binary fixed-point mapper with `divisor = 2^fractional_bits`.
    pub fn with_fractional_bits(width: u32, fractional_bits: u32) -> Result<Self> {
        let width = check_width(width)?;
        if fractional_bits >= width {
            return Err(MapperError::DivisorTooLarge {
                divisor: 1u64.checked_shl(fractional_bits).unwrap_or(u64::MAX),
                max: max_value(width),
                width,
            });
        }
        Self::new(width, 1u64 << fractional_bits)
    }

    /// Storage width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// `2^width`, the modulus of the storage domain.
    pub fn group_size(&self) -> u128 {
        group_size(self.width)
    }

    /// Largest divisor accepted for this width.
    pub fn max_divisor(&self) -> u64 {
        max_value(self.width)
    }

    /// Current divisor.
    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    /// Replace the divisor.
    ///
    /// Applies the same bound as construction. On error the previous
    /// divisor stays in effect.
    pub fn set_divisor(&mut self, divisor: u64) -> Result<()> {
        self.divisor = validate_divisor(self.width, divisor)?;
        tracing::debug!(width = self.width, divisor, "updated divisor");
        Ok(())
    }

    /// Map a real value to a fixed-point word.
    ///
    /// Total over all inputs: out-of-range values wrap modulo `2^width`
    /// and trigger a rate-limited warning. NaN maps to 0.
    pub fn encode(&self, input: f64) -> u64 {
        let product = input * self.divisor as f64;
        if !self.fits(product) {
            self.warn_precision_loss(input, product);
        }
        wrap_to_width(truncate_toward_zero(product), self.width)
    }

    /// Map a real value to a fixed-point word, refusing values that would
    /// wrap.
    pub fn encode_checked(&self, input: f64) -> Result<u64> {
        let product = input * self.divisor as f64;
        if !self.fits(product) {
            return Err(MapperError::Overflow {
                input,
                product,
                group_size: self.group_size_f64(),
            });
        }
        Ok(wrap_to_width(truncate_toward_zero(product), self.width))
    }

    /// Element-wise [`encode`](Self::encode).
    pub fn encode_batch(&self, input: &[f64]) -> Vec<u64> {
        input.iter().map(|&x| self.encode(x)).collect()
    }

    /// Element-wise [`encode_checked`](Self::encode_checked). Fails on the
    /// first out-of-range element.
    pub fn encode_batch_checked(&self, input: &[f64]) -> Result<Vec<u64>> {
        input.iter().map(|&x| self.encode_checked(x)).collect()
    }

    /// Map a word back to a real value, reading it as an unsigned
    /// magnitude. Bits above `width` are ignored.
    pub fn decode_unsigned(&self, input: u64) -> f64 {
        (input & width_mask(self.width)) as f64 / self.divisor as f64
    }

    /// Element-wise [`decode_unsigned`](Self::decode_unsigned).
    pub fn decode_unsigned_batch(&self, input: &[u64]) -> Vec<f64> {
        input.iter().map(|&x| self.decode_unsigned(x)).collect()
    }

    /// Map a word back to a real value after interpreting it as a
    /// two's-complement signed integer of the same width.
    pub fn decode_signed(&self, input: u64) -> f64 {
        to_signed(input, self.width) as f64 / self.divisor as f64
    }

    /// Element-wise [`decode_signed`](Self::decode_signed).
    pub fn decode_signed_batch(&self, input: &[u64]) -> Vec<f64> {
        input.iter().map(|&x| self.decode_signed(x)).collect()
    }

    /// Counters of the precision warning: how many were emitted and how
    /// many were held back by the rate limit.
    pub fn precision_stats(&self) -> ThrottleStats {
        self.throttle.stats()
    }

    fn group_size_f64(&self) -> f64 {
        group_size(self.width) as f64
    }

    /// NaN fails the comparison and counts as out of range.
    fn fits(&self, product: f64) -> bool {
        product.abs() <= self.group_size_f64()
    }

    fn warn_precision_loss(&self, input: f64, product: f64) {
        if let Some(suppressed) = self.throttle.try_acquire() {
            let group_size = self.group_size_f64();
            tracing::warn!(
                input,
                product,
                group_size,
                suppressed,
                "Magnitude of input too large. Conversion exceeds group size and may incur precision loss."
            );
        }
    }
}

fn validate_divisor(width: u32, divisor: u64) -> Result<u64> {
    if divisor == 0 {
        return Err(MapperError::ZeroDivisor);
    }
    let max = max_value(width);
    if divisor > max {
        return Err(MapperError::DivisorTooLarge {
            divisor,
            max,
            width,
        });
    }
    Ok(divisor)
}
