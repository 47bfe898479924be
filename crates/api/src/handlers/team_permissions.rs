use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::team_service::TeamService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{TeamPermissionsResponse, UpdateTeamPermissionsRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/admin/team/{user_id}",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Capability grants for the user", body = TeamPermissionsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn get_team_permissions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TeamPermissionsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ManageTeam)?;

    let permissions = TeamService::permissions_of(&state, user_id).await?;
    Ok(Json(permissions))
}

#[utoipa::path(
    put,
    path = "/api/admin/team/{user_id}",
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UpdateTeamPermissionsRequest,
    responses(
        (status = 200, description = "Grant set replaced", body = TeamPermissionsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_team_permissions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateTeamPermissionsRequest>,
) -> Result<Json<TeamPermissionsResponse>, ApiError> {
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::ManageTeam)?;

    let permissions = TeamService::replace_permissions(&state, &reviewer, user_id, req).await?;
    Ok(Json(permissions))
}
