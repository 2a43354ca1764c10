//! Standalone proof computation endpoint.
//!
//! Lets a caller run the derivation against explicit keys and seed, without
//! touching any registered identity. Useful for clients without a local
//! implementation and for demonstrating the scheme.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use super::{ErrorBody, error_response};
use crate::state::AppState;
use hourlock_common::proof::derive_proof;

#[derive(Deserialize)]
pub struct DeriveRequest {
    key1: u64,
    key2: u64,
    seed: i64,
}

#[derive(Serialize)]
pub struct DeriveResponse {
    token: f64,
}

/// Compute the proof for an explicit key pair and seed
pub async fn derive(
    State(state): State<AppState>,
    Json(payload): Json<DeriveRequest>,
) -> Result<Json<DeriveResponse>, (StatusCode, Json<ErrorBody>)> {
    match derive_proof(
        payload.key1,
        payload.key2,
        payload.seed,
        state.config.key_length,
    ) {
        Ok(token) => Ok(Json(DeriveResponse { token })),
        Err(err) => Err(error_response(StatusCode::BAD_REQUEST, &err.to_string())),
    }
}
