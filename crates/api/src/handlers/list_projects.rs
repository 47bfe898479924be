use axum::extract::{Extension, Json, Query, State};
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::ProjectsResponse;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectListParams {
    /// When true, list the caller's own projects instead of the open market.
    pub mine: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectListParams),
    responses(
        (status = 200, description = "Projects open for funding, or the caller's own", body = ProjectsResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<ProjectListParams>,
) -> Result<Json<ProjectsResponse>, ApiError> {
    let projects =
        ProjectService::list(&state, &claims, params.mine.unwrap_or(false)).await?;
    Ok(Json(projects))
}
