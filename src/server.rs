use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    // Wide open for the demo; a deployment must narrow this to an
    // allow-list of trusted origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Healthcheck
        .route("/", get(crate::routes::health::root))
        // Auth stubs
        .route("/api/v1/auth/login", post(crate::routes::auth::login))
        .route("/api/v1/auth/me", get(crate::routes::auth::me))
        // Dashboard
        .route("/api/v1/overview", get(crate::routes::overview::overview))
        .route(
            "/api/v1/websites",
            get(crate::routes::websites::list_websites),
        )
        .route("/api/v1/alerts", get(crate::routes::alerts::list_alerts))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
