use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{settings_nav, system_links, ComponentNav, NavEntry, SettingsSection, SystemLinks};
use crate::model::{Branch, Component, ComponentConfiguration, Extension};

/// Resolved configuration shared by the handlers.
pub struct AppState {
    pub base_url: String,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    UnprocessableEntity(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnprocessableEntity(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
        }
    }
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ComponentNavRequest {
    pub component: Component,
    pub branch: Option<Branch>,
    #[serde(default)]
    pub configuration: ComponentConfiguration,
    #[serde(default)]
    pub branches_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct ComponentNavResponse {
    pub entries: Vec<NavEntry>,
}

pub async fn component_navigation(
    RequestJson(request): RequestJson<ComponentNavRequest>,
) -> Result<Json<ComponentNavResponse>, ApiError> {
    if let Some(branch) = &request.branch {
        if branch.is_short_living() && branch.merge_branch.is_none() {
            return Err(ApiError::UnprocessableEntity(format!(
                "short-lived branch '{}' is missing its merge target",
                branch.name
            )));
        }
    }

    log::debug!(
        "assembling navigation for component '{}'",
        request.component.key
    );
    let entries = ComponentNav::new(
        &request.component,
        request.branch.as_ref(),
        &request.configuration,
        request.branches_enabled,
    )
    .entries();
    Ok(Json(ComponentNavResponse { entries }))
}

#[derive(Debug, Deserialize)]
pub struct SettingsNavRequest {
    #[serde(default)]
    pub extensions: Vec<Extension>,
    #[serde(default)]
    pub custom_organizations: bool,
    pub current_path: String,
}

#[derive(Debug, Serialize)]
pub struct SettingsNavResponse {
    pub sections: Vec<SettingsSection>,
}

pub async fn settings_navigation(
    State(state): State<SharedState>,
    RequestJson(request): RequestJson<SettingsNavRequest>,
) -> Json<SettingsNavResponse> {
    let sections = settings_nav(
        &request.extensions,
        request.custom_organizations,
        &request.current_path,
        &state.base_url,
    );
    Json(SettingsNavResponse { sections })
}

#[derive(Debug, Deserialize)]
pub struct SystemLinksQuery {
    #[serde(default)]
    pub can_download_logs: bool,
}

pub async fn get_system_links(
    State(state): State<SharedState>,
    Query(query): Query<SystemLinksQuery>,
) -> Json<SystemLinks> {
    Json(system_links(&state.base_url, query.can_download_logs))
}
