//! Width-typed wrapper over [`FixedPointMapper`].
//!
//! Protocol code usually stores shares in a native word (`u32`, `u64`).
//! [`TypedMapper`] fixes the width from that word type and hands back
//! values of that type, so callers never pass widths around by hand.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::time::Duration;

use super::FixedPointMapper;
use crate::diagnostics::DEFAULT_WARN_INTERVAL;
use crate::error::Result;

/// Unsigned word usable as fixed-point storage.
pub trait FixedWord: Copy + Debug + Send + Sync + 'static {
    /// Width of the word in bits.
    const WIDTH: u32;

    /// Widen to `u64`.
    fn to_u64(self) -> u64;

    /// Keep the low `WIDTH` bits of `value`.
    fn from_u64_truncating(value: u64) -> Self;
}

macro_rules! impl_fixed_word {
    ($($t:ty),*) => {
        $(
            impl FixedWord for $t {
                const WIDTH: u32 = <$t>::BITS;

                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn from_u64_truncating(value: u64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_fixed_word!(u8, u16, u32, u64);

/// [`FixedPointMapper`] whose width is `T::WIDTH`.
///
/// # Example
///
/// ```rust
/// use number_mapper::TypedMapper;
///
/// let mapper = TypedMapper::<u8>::new(100).unwrap();
/// let encoded: u8 = mapper.encode(1.5);
/// assert_eq!(encoded, 150);
/// assert_eq!(mapper.decode_signed(encoded), -1.06);
/// ```
#[derive(Clone, Debug)]
pub struct TypedMapper<T: FixedWord> {
    inner: FixedPointMapper,
    _word: PhantomData<T>,
}

impl<T: FixedWord> TypedMapper<T> {
    /// Create a mapper for `T` scaled by `divisor`.
    pub fn new(divisor: u64) -> Result<Self> {
        Self::with_warn_interval(divisor, DEFAULT_WARN_INTERVAL)
    }

    /// Like [`new`](Self::new), with a custom precision-warning window.
    pub fn with_warn_interval(divisor: u64, warn_interval: Duration) -> Result<Self> {
        Ok(Self {
            inner: FixedPointMapper::with_warn_interval(T::WIDTH, divisor, warn_interval)?,
            _word: PhantomData,
        })
    }

    /// The underlying width-parameterized mapper.
    pub fn inner(&self) -> &FixedPointMapper {
        &self.inner
    }

    /// Current divisor.
    pub fn divisor(&self) -> u64 {
        self.inner.divisor()
    }

    /// Replace the divisor; on error the previous one is kept.
    pub fn set_divisor(&mut self, divisor: u64) -> Result<()> {
        self.inner.set_divisor(divisor)
    }

    /// See [`FixedPointMapper::encode`].
    pub fn encode(&self, input: f64) -> T {
        T::from_u64_truncating(self.inner.encode(input))
    }

    /// See [`FixedPointMapper::encode_checked`].
    pub fn encode_checked(&self, input: f64) -> Result<T> {
        self.inner.encode_checked(input).map(T::from_u64_truncating)
    }

    /// Element-wise [`encode`](Self::encode).
    pub fn encode_batch(&self, input: &[f64]) -> Vec<T> {
        input.iter().map(|&x| self.encode(x)).collect()
    }

    /// See [`FixedPointMapper::decode_unsigned`].
    pub fn decode_unsigned(&self, input: T) -> f64 {
        self.inner.decode_unsigned(input.to_u64())
    }

    /// Element-wise [`decode_unsigned`](Self::decode_unsigned).
    pub fn decode_unsigned_batch(&self, input: &[T]) -> Vec<f64> {
        input.iter().map(|&x| self.decode_unsigned(x)).collect()
    }

    /// See [`FixedPointMapper::decode_signed`].
    pub fn decode_signed(&self, input: T) -> f64 {
        self.inner.decode_signed(input.to_u64())
    }

    /// Element-wise [`decode_signed`](Self::decode_signed).
    pub fn decode_signed_batch(&self, input: &[T]) -> Vec<f64> {
        input.iter().map(|&x| self.decode_signed(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapperError;

    #[test]
    fn test_word_widths() {
        assert_eq!(u8::WIDTH, 8);
        assert_eq!(u16::WIDTH, 16);
        assert_eq!(u32::WIDTH, 32);
        assert_eq!(u64::WIDTH, 64);
        assert_eq!(u16::from_u64_truncating(0x1_2345), 0x2345);
    }

    #[test]
    fn test_typed_u8_matches_untyped() {
        let typed = TypedMapper::<u8>::new(100).unwrap();
        let untyped = FixedPointMapper::new(8, 100).unwrap();
        for x in [0.0, 0.5, 1.27, -1.28, 2.5, 3.0, -0.01] {
            assert_eq!(typed.encode(x) as u64, untyped.encode(x));
        }
        assert_eq!(typed.inner().width(), 8);
    }

    #[test]
    fn test_typed_rejects_divisor() {
        assert!(matches!(
            TypedMapper::<u8>::new(256),
            Err(MapperError::DivisorTooLarge { .. })
        ));
        assert!(TypedMapper::<u16>::new(256).is_ok());
    }

    #[test]
    fn test_typed_i32_semantics() {
        let mapper = TypedMapper::<u32>::new(1000).unwrap();
        let words = mapper.encode_batch(&[-1.5, 2.25]);
        assert_eq!(words[0], (-1500i32) as u32);
        assert_eq!(mapper.decode_signed_batch(&words), vec![-1.5, 2.25]);
        assert_eq!(mapper.decode_unsigned(words[1]), 2.25);
    }

    #[test]
    fn test_typed_set_divisor() {
        let mut mapper = TypedMapper::<u16>::new(10).unwrap();
        assert!(mapper.set_divisor(70_000).is_err());
        assert_eq!(mapper.divisor(), 10);
        mapper.set_divisor(1000).unwrap();
        assert_eq!(mapper.encode_checked(1.5).unwrap(), 1500u16);
        assert!(mapper.encode_checked(70.0).is_err());
    }
}
