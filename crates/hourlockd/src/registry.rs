//! Identity registry and the per-identity verification state machine.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::{Mutex, RwLock};

use hourlock_common::HourlockError;
use hourlock_common::proof::derive_proof;
use hourlock_common::window::{Clock, SystemClock, window_at};

/// Per-identity state.
///
/// `secret` is assigned once at registration and never rotated. `challenge`
/// is replaced wholesale on every issuance; only the latest one counts.
#[derive(Debug)]
pub struct UserRecord {
    pub identity: String,
    pub secret: u64,
    pub challenge: Option<u64>,
    pub challenge_window: Option<i64>,
    /// Set by the first verification attempt after a challenge and never
    /// cleared again — not even by a fresh challenge issuance. Only the
    /// window comparison in [`AuthRegistry::verify`] re-opens attempts.
    pub locked: bool,
}

/// In-memory identity-to-record mapping.
///
/// The outer `RwLock` guards membership; each record sits behind its own
/// `Mutex`, so operations on distinct identities run concurrently while a
/// single identity's transitions are serialized. Lock order is always map
/// first, then record. Growth is unbounded by design: there is no eviction
/// and no persistence across restarts.
pub struct AuthRegistry {
    key_length: u32,
    users: RwLock<HashMap<String, Arc<Mutex<UserRecord>>>>,
    clock: Arc<dyn Clock>,
}

impl AuthRegistry {
    pub fn new(key_length: u32) -> Self {
        Self::with_clock(key_length, Arc::new(SystemClock))
    }

    pub fn with_clock(key_length: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            key_length,
            users: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Uniform key with exactly `key_length` decimal digits.
    fn generate_key(&self) -> u64 {
        let low = 10u64.pow(self.key_length - 1);
        let high = 10u64.pow(self.key_length) - 1;
        rand::rng().random_range(low..=high)
    }

    fn window_now(&self) -> i64 {
        window_at(self.clock.now(), 0)
    }

    /// Register an identity and return its secret key.
    ///
    /// Idempotent: an existing record keeps its secret, registration never
    /// rotates it.
    pub async fn register(&self, identity: &str) -> u64 {
        let mut users = self.users.write().await;
        if let Some(record) = users.get(identity) {
            return record.lock().await.secret;
        }

        let secret = self.generate_key();
        let record = UserRecord {
            identity: identity.to_string(),
            secret,
            challenge: None,
            challenge_window: None,
            locked: false,
        };
        users.insert(identity.to_string(), Arc::new(Mutex::new(record)));

        tracing::info!(identity = %identity, "Registered new identity");

        secret
    }

    /// Issue a fresh challenge key, binding it to the current window.
    ///
    /// The returned seed is evaluated fresh for the caller's benefit;
    /// verification recomputes its own. `locked` is deliberately left
    /// untouched, so a lock taken earlier in this window still applies to
    /// the new challenge.
    pub async fn issue_challenge(&self, identity: &str) -> Result<(u64, i64), HourlockError> {
        let record = self
            .lookup(identity)
            .await
            .ok_or_else(|| HourlockError::UnknownIdentity(identity.to_string()))?;
        let mut record = record.lock().await;

        let challenge = self.generate_key();
        record.challenge = Some(challenge);
        record.challenge_window = Some(self.window_now());

        tracing::debug!(identity = %identity, "Issued challenge");

        Ok((challenge, self.window_now()))
    }

    /// Verify a submitted proof against the current window.
    ///
    /// Unknown identities and records with no outstanding challenge report
    /// plain failure, indistinguishable from a wrong proof, so callers
    /// cannot probe which identities exist. A derivation invariant break
    /// ([`HourlockError::LengthMismatch`]) is surfaced, never folded into
    /// `false`.
    pub async fn verify(&self, identity: &str, token: f64) -> Result<bool, HourlockError> {
        let Some(record) = self.lookup(identity).await else {
            tracing::debug!(identity = %identity, "Verification for unknown identity");
            return Ok(false);
        };
        let mut record = record.lock().await;
        let now_window = self.window_now();

        // One attempt per window: once locked, reject outright until the
        // clock leaves the window the challenge was bound to. Even the
        // correct proof fails here.
        if record.locked && record.challenge_window == Some(now_window) {
            tracing::debug!(identity = %identity, "Repeat attempt within window rejected");
            return Ok(false);
        }

        // This attempt consumes the window, win or lose.
        record.locked = true;

        let Some(challenge) = record.challenge else {
            tracing::debug!(identity = %identity, "Verification without a challenge");
            return Ok(false);
        };

        let expected = derive_proof(record.secret, challenge, now_window, self.key_length)?;
        let success = expected == token;

        if success {
            tracing::info!(identity = %identity, "Verification succeeded");
        } else {
            tracing::debug!(identity = %identity, "Verification failed");
        }

        Ok(success)
    }

    /// Number of registered identities.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    async fn lookup(&self, identity: &str) -> Option<Arc<Mutex<UserRecord>>> {
        self.users.read().await.get(identity).cloned()
    }

    /// Test hook: pin an identity's keys to known values.
    #[cfg(test)]
    async fn set_keys(&self, identity: &str, secret: u64, challenge: u64) {
        let record = self.lookup(identity).await.expect("identity registered");
        let mut record = record.lock().await;
        record.secret = secret;
        record.challenge = Some(challenge);
    }
}
