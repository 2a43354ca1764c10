//! Shared constants for Hourlock components.

/// Default hourlockd HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8888";

/// Default key length in decimal digits.
///
/// Short for demo purposes; real deployments should use 17 or more.
pub const DEFAULT_KEY_LENGTH: u32 = 4;

/// Minimum supported key length
pub const MIN_KEY_LENGTH: u32 = 1;

/// Maximum supported key length (keys are stored as `u64`; `10^20` does not fit)
pub const MAX_KEY_LENGTH: u32 = 19;
