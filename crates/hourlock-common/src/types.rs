//! Core types shared across Hourlock components.

use serde::{Deserialize, Serialize};

/// Registration result returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Identity the secret belongs to
    pub username: String,

    /// Long-lived secret key (key1), assigned once and never rotated
    pub key1: u64,
}

/// Challenge issued for a pending verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Identity the challenge was issued to
    pub username: String,

    /// Short-lived challenge key (key2), regenerated on every issuance
    pub key2: u64,

    /// Window seed at issuance, echoed so the caller can compute its proof.
    /// Verification recomputes the seed at call time; a proof built against
    /// this value fails once the clock crosses into the next UTC hour.
    pub seed: i64,
}
