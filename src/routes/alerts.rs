use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::config::DEFAULT_ALERT_LIMIT;
use crate::error::ApiError;
use crate::models::Alert;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AlertsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_ALERT_LIMIT
}

/// Clamp a requested limit against the number of stored alerts.
/// Negative limits are rejected rather than wrapping around.
pub fn effective_limit(limit: i64, available: usize) -> Result<usize, ApiError> {
    if limit < 0 {
        return Err(ApiError::NegativeLimit(limit));
    }
    Ok((limit as usize).min(available))
}

/// GET /api/v1/alerts — most recent alerts, newest first. Parameter: ?limit=20
pub async fn list_alerts(
    State(state): State<SharedState>,
    Query(query): Query<AlertsQuery>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let alerts = state.data.alerts();
    let take = effective_limit(query.limit, alerts.len())?;
    Ok(Json(alerts[..take].to_vec()))
}
