use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::investment_service::InvestmentService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{InvestmentRequestDto, ReviewDecisionRequest};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/investments/{request_id}/review",
    params(("request_id" = Uuid, Path, description = "Investment request id")),
    request_body = ReviewDecisionRequest,
    responses(
        (status = 200, description = "Request reviewed; approval debits the wallet and credits the funding ledger", body = InvestmentRequestDto),
        (status = 400, description = "Wallet balance no longer covers the request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown request"),
        (status = 409, description = "Already reviewed")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn review_investment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(request_id): Path<Uuid>,
    Json(req): Json<ReviewDecisionRequest>,
) -> Result<Json<InvestmentRequestDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let reviewer =
        AccessControl::require_reviewer(&state, &claims, Capability::ReviewInvestments)?;

    let request = InvestmentService::review(&state, &reviewer, request_id, req).await?;
    Ok(Json(request))
}
