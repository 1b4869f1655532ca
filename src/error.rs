//! Error types for number-mapper

use thiserror::Error;

/// All possible errors in number-mapper
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapperError {
    /// Divisor does not fit in the storage width
    #[error("Divisor {divisor} exceeds the max value a {width}-bit word can represent ({max})")]
    DivisorTooLarge {
        /// Rejected divisor
        divisor: u64,
        /// Largest value representable in `width` bits
        max: u64,
        /// Storage width in bits
        width: u32,
    },

    /// Divisor of zero would make every decode divide by zero
    #[error("Divisor must be positive")]
    ZeroDivisor,

    /// Storage width outside 1..=64
    #[error("Unsupported width: {0} (must be 1-64)")]
    UnsupportedWidth(u32),

    /// Scaled input does not fit in the group (checked encoding only)
    #[error("Input {input} scales to {product}, exceeding group size {group_size}")]
    Overflow {
        /// Real input
        input: f64,
        /// `input * divisor`
        product: f64,
        /// `2^width` as f64
        group_size: f64,
    },

    /// Configuration source could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MapperError {
    /// Whether this error comes from an invalid configuration rather than
    /// from an input value.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, MapperError::Overflow { .. })
    }
}

impl From<serde_json::Error> for MapperError {
    fn from(e: serde_json::Error) -> Self {
        MapperError::InvalidConfig(e.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MapperError>;
