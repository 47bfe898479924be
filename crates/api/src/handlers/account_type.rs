use axum::extract::{Extension, Json, State};
use fundbridge_core::services::profile_service::ProfileService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{AccountTypeRequest, ProfileResponse};
use std::sync::Arc;

#[utoipa::path(
    put,
    path = "/api/profile/account_type",
    request_body = AccountTypeRequest,
    responses(
        (status = 200, description = "Account type switched", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not yet provisioned")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn switch_account_type(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AccountTypeRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::switch_account_type(&state, &claims, req).await?;
    Ok(Json(profile))
}
