use axum::extract::{Extension, Json, State};
use fundbridge_core::services::profile_service::ProfileService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{ProfileResponse, UpsertProfileRequest};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn upsert_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let profile = ProfileService::upsert(&state, &claims, req).await?;
    Ok(Json(profile))
}
