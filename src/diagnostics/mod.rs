//! Diagnostics plumbing for number-mapper.
//!
//! - [`throttle`] — rate limiting for the precision-loss warning

pub mod throttle;

pub use throttle::{ThrottleStats, WarnThrottle, DEFAULT_WARN_INTERVAL};
