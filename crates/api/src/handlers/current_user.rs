use axum::extract::{Extension, Json, State};
use fundbridge_core::services::profile_service::ProfileService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::ProfileResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Current user profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not yet provisioned")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn current_user_details(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::current(&state, &claims).await?;
    Ok(Json(profile))
}
