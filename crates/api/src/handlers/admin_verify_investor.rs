use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::profile_service::ProfileService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{InvestorProfileDto, UpdateVerificationRequest};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/admin/investors/{user_id}/verification",
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UpdateVerificationRequest,
    responses(
        (status = 200, description = "Verification status set", body = InvestorProfileDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "No declared investor profile")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn verify_investor(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateVerificationRequest>,
) -> Result<Json<InvestorProfileDto>, ApiError> {
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::ManageUsers)?;

    let profile = ProfileService::set_investor_verification(&state, &reviewer, user_id, req).await?;
    Ok(Json(profile))
}
