use axum::extract::{Extension, Path, State};
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project soft-deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the project owner"),
        (status = 404, description = "Unknown project")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ProjectService::delete(&state, &claims, project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
