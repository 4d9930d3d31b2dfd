use axum::extract::State;
use axum::Json;

use crate::models::OverviewResponse;
use crate::state::SharedState;

/// GET /api/v1/overview — data for the four big stat cards on the dashboard.
///
/// A real implementation would aggregate scan history here.
pub async fn overview(State(state): State<SharedState>) -> Json<OverviewResponse> {
    Json(state.data.overview())
}
