use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::user_service::UserService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{AdminUserDto, AdminUsersResponse, UserFlagsRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users, newest first", body = AdminUsersResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AdminUsersResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ManageUsers)?;

    let users = UserService::list_all(&state).await?;
    Ok(Json(users))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/flags",
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UserFlagsRequest,
    responses(
        (status = 200, description = "Flags updated", body = AdminUserDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn set_user_flags(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UserFlagsRequest>,
) -> Result<Json<AdminUserDto>, ApiError> {
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::ManageUsers)?;

    let user = UserService::set_flags(&state, &reviewer, user_id, req).await?;
    Ok(Json(user))
}
