use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{self, SharedState};

pub fn create_router() -> Router<SharedState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Navigation assembly
        .route(
            "/api/navigation/component",
            post(handlers::component_navigation),
        )
        .route(
            "/api/navigation/settings",
            post(handlers::settings_navigation),
        )
        // System page links
        .route("/api/system/links", get(handlers::get_system_links))
}
