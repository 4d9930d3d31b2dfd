use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{is_valid_email, LoginRequest, User};
use crate::state::SharedState;

/// POST /api/v1/auth/login — fake login for the demo.
///
/// The password is never inspected; the email must match the configured
/// account exactly (case-sensitive). No session or token is issued.
pub async fn login(
    State(state): State<SharedState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    if !is_valid_email(&body.email) {
        return Err(ApiError::InvalidEmail(body.email));
    }

    let user = state.data.user();
    if body.email != user.email {
        info!("Rejected login attempt for {}", body.email);
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(user.clone()))
}

/// GET /api/v1/auth/me — current user.
///
/// Single-tenant demo: always the fixture account, no session lookup.
pub async fn me(State(state): State<SharedState>) -> Json<User> {
    Json(state.data.user().clone())
}
