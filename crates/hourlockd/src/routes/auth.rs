//! Registration, challenge issuance, and verification endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use super::{ErrorBody, error_response};
use crate::state::AppState;
use hourlock_common::{Challenge, HourlockError, Registration};

#[derive(Deserialize)]
pub struct RegisterRequest {
    username: String,
}

/// Register an identity and return its secret key.
///
/// Idempotent: re-registering returns the existing secret unchanged.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Registration>, (StatusCode, Json<ErrorBody>)> {
    if payload.username.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "username must not be empty",
        ));
    }

    let key1 = state.registry.register(&payload.username).await;

    Ok(Json(Registration {
        username: payload.username,
        key1,
    }))
}

#[derive(Deserialize)]
pub struct ChallengeRequest {
    username: String,
}

/// Issue a fresh challenge key and echo the current window seed
pub async fn issue_challenge(
    State(state): State<AppState>,
    Json(payload): Json<ChallengeRequest>,
) -> Result<Json<Challenge>, (StatusCode, Json<ErrorBody>)> {
    match state.registry.issue_challenge(&payload.username).await {
        Ok((key2, seed)) => Ok(Json(Challenge {
            username: payload.username,
            key2,
            seed,
        })),
        Err(HourlockError::UnknownIdentity(_)) => {
            Err(error_response(StatusCode::NOT_FOUND, "User not found"))
        }
        Err(err) => {
            tracing::error!(error = %err, "Challenge issuance failed");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            ))
        }
    }
}

#[derive(Deserialize)]
pub struct VerifyRequest {
    username: String,
    token: f64,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    status: &'static str,
}

/// Verify a submitted proof.
///
/// Unknown identities surface as the same 401 as a wrong proof; only
/// internal derivation errors are distinguished (500).
pub async fn verify_token(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, (StatusCode, Json<ErrorBody>)> {
    match state.registry.verify(&payload.username, payload.token).await {
        Ok(true) => Ok(Json(VerifyResponse {
            status: "Authentication successful",
        })),
        Ok(false) => Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Authentication failed",
        )),
        Err(err) => {
            tracing::error!(identity = %payload.username, error = %err, "Verification aborted");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            ))
        }
    }
}
