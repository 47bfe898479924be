use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::services::project_service::ProjectService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::ProjectDetailResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project with its funding ledger", body = ProjectDetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown or deleted project")
    ),
    security(("bearerAuth" = [])),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<ProjectDetailResponse>, ApiError> {
    let detail = ProjectService::detail(&state, &claims, project_id).await?;
    Ok(Json(detail))
}
