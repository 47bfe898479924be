use axum::extract::{Extension, Json, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::ProjectsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    responses(
        (status = 200, description = "Every project regardless of status", body = ProjectsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_all_projects(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ProjectsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ReviewProjects)?;

    let projects = ProjectService::list_all(&state).await?;
    Ok(Json(projects))
}
