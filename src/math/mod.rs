//! Width arithmetic for number-mapper.
//!
//! Provides the bit-level helpers shared by the mapper and its typed
//! wrappers:
//!
//! - [`bits`] — group size, masks, wraparound and signed reinterpretation

pub mod bits;

pub use bits::{
    check_width, group_size, max_value, to_signed, truncate_toward_zero, width_mask, wrap_to_width,
    MAX_WIDTH,
};
