use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{ProjectDto, UpdateProjectRequest};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the project owner"),
        (status = 404, description = "Unknown project")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let project = ProjectService::update(&state, &claims, project_id, req).await?;
    Ok(Json(project))
}
