//! # Hourlock Common
//!
//! Shared types and the protocol core used across Hourlock components.
//!
//! The proof derivation and time-window functions live here (rather than in
//! the server) because the protocol only works when server and client compute
//! bit-identical proofs from identical inputs — both sides must run the same
//! code path.
//!
//! ## Modules
//! - `proof` - Deterministic proof derivation and significant-digit rounding
//! - `window` - Hourly time-window seed derivation
//! - `types` - Wire-level data structures
//! - `error` - Common error types
//! - `constants` - Shared configuration constants

pub mod constants;
pub mod error;
pub mod proof;
pub mod types;
pub mod window;

pub use error::HourlockError;
pub use types::*;
