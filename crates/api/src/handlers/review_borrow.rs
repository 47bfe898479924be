use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::borrow_service::BorrowService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{BorrowDto, ReviewDecisionRequest};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/borrow/{request_id}/review",
    params(("request_id" = Uuid, Path, description = "Borrow request id")),
    request_body = ReviewDecisionRequest,
    responses(
        (status = 200, description = "Borrow request reviewed", body = BorrowDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown request"),
        (status = 409, description = "Already reviewed")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn review_borrow(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(request_id): Path<Uuid>,
    Json(req): Json<ReviewDecisionRequest>,
) -> Result<Json<BorrowDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let reviewer =
        AccessControl::require_reviewer(&state, &claims, Capability::ReviewBorrowRequests)?;

    let borrow = BorrowService::review(&state, &reviewer, request_id, req).await?;
    Ok(Json(borrow))
}
