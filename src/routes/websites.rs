use axum::extract::State;
use axum::Json;

use crate::models::Website;
use crate::state::SharedState;

/// GET /api/v1/websites — all monitored websites in fixed display order.
/// No filtering, sorting, or pagination parameters.
pub async fn list_websites(State(state): State<SharedState>) -> Json<Vec<Website>> {
    Json(state.data.websites().to_vec())
}
