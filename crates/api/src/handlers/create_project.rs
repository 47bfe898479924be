use axum::extract::{Extension, Json, State};
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{CreateProjectRequest, ProjectDto};
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created, pending review", body = ProjectDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Borrower account required")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectDto>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let project = ProjectService::create(&state, &claims, req).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
