use axum::Json;

use crate::config::SERVICE_NAME;

/// GET / — liveness probe for external orchestration.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_names_the_service() {
        let Json(body) = root().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "mxsec-api");
    }
}
