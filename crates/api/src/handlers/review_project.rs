use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{ProjectDto, ReviewDecisionRequest};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/projects/{project_id}/review",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = ReviewDecisionRequest,
    responses(
        (status = 200, description = "Project reviewed", body = ProjectDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown project"),
        (status = 409, description = "Already reviewed")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn review_project(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<ReviewDecisionRequest>,
) -> Result<Json<ProjectDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::ReviewProjects)?;

    let project = ProjectService::review(&state, &reviewer, project_id, req).await?;
    Ok(Json(project))
}
