//! # number-mapper: fixed-point boundary for MPC protocols
//!
//! Secure multiparty computation protocols do their arithmetic over
//! `W`-bit unsigned words modulo `2^W`. This crate maps host `f64` values
//! into that domain and back.
//!
//! ## Operations
//!
//! - [`FixedPointMapper::encode()`] - Scale, truncate and wrap a real value
//! - [`FixedPointMapper::decode_unsigned()`] - Divide an unsigned word back down
//! - [`FixedPointMapper::decode_signed()`] - Same, after two's-complement reinterpretation
//! - [`FixedPointMapper::set_divisor()`] - Rescale, validated against the width
//!
//! Each has a slice batch form, and [`mapper::array`] adds `ndarray` forms.
//!
//! ## Typed API
//!
//! Use [`TypedMapper`] to tie the width to a native word type
//! (`u8`, `u16`, `u32`, `u64`).
//!
//! ## Diagnostics
//!
//! Inputs that do not fit the group still encode (with wraparound) and
//! produce a `tracing` warning, rate-limited by
//! [`WarnThrottle`](diagnostics::WarnThrottle).

#![deny(missing_docs)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod mapper;
pub mod math;

// Re-exports
pub use config::MapperConfig;
pub use diagnostics::ThrottleStats;
pub use error::{MapperError, Result};
pub use mapper::{FixedPointMapper, FixedWord, TypedMapper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
