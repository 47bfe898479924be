use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::topup_service::TopUpService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{ReviewDecisionRequest, TopUpDto};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/topups/{request_id}/review",
    params(("request_id" = Uuid, Path, description = "Top-up request id")),
    request_body = ReviewDecisionRequest,
    responses(
        (status = 200, description = "Claim reviewed; approval credits the wallet", body = TopUpDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown claim"),
        (status = 409, description = "Already reviewed")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn review_top_up(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(request_id): Path<Uuid>,
    Json(req): Json<ReviewDecisionRequest>,
) -> Result<Json<TopUpDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::ReviewTopUps)?;

    let topup = TopUpService::review(&state, &reviewer, request_id, req).await?;
    Ok(Json(topup))
}
