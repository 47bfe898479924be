use axum::extract::{Extension, Json, State};
use fundbridge_core::services::profile_service::ProfileService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{InvestorProfileDto, UpdateInvestorProfileRequest};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/profile/investor",
    responses(
        (status = 200, description = "Investor profile, null when never declared", body = InvestorProfileDto),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn get_investor_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Option<InvestorProfileDto>>, ApiError> {
    let profile = ProfileService::investor_profile(&state, &claims).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/profile/investor",
    request_body = UpdateInvestorProfileRequest,
    responses(
        (status = 200, description = "Investor profile updated", body = InvestorProfileDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn update_investor_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateInvestorProfileRequest>,
) -> Result<Json<InvestorProfileDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let profile = ProfileService::update_investor_profile(&state, &claims, req).await?;
    Ok(Json(profile))
}
