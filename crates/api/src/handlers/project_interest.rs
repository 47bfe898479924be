use axum::extract::{Extension, Path, State};
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/interest",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Interest recorded"),
        (status = 400, description = "Project not open for funding"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown project")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn add_project_interest(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ProjectService::add_interest(&state, &claims, project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}/interest",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Interest withdrawn"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn remove_project_interest(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ProjectService::remove_interest(&state, &claims, project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
