use axum::extract::{Extension, Json, State};
use fundbridge_core::services::profile_service::ProfileService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{BorrowerProfileDto, UpdateBorrowerProfileRequest};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/profile/borrower",
    responses(
        (status = 200, description = "Borrower profile, null when never filled in", body = BorrowerProfileDto),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn get_borrower_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Option<BorrowerProfileDto>>, ApiError> {
    let profile = ProfileService::borrower_profile(&state, &claims).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/profile/borrower",
    request_body = UpdateBorrowerProfileRequest,
    responses(
        (status = 200, description = "Borrower profile updated", body = BorrowerProfileDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn update_borrower_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateBorrowerProfileRequest>,
) -> Result<Json<BorrowerProfileDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let profile = ProfileService::update_borrower_profile(&state, &claims, req).await?;
    Ok(Json(profile))
}
