use axum::extract::{Extension, Json, State};
use fundbridge_core::services::borrow_service::BorrowService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{BorrowDto, BorrowSubmitRequest};
use http::StatusCode;
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/borrow",
    request_body = BorrowSubmitRequest,
    responses(
        (status = 201, description = "Borrow request recorded", body = BorrowDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Borrower account required")
    ),
    security(("bearerAuth" = [])),
    tag = "Borrowing"
)]
pub async fn submit_borrow_request(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<BorrowSubmitRequest>,
) -> Result<(StatusCode, Json<BorrowDto>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let request = BorrowService::submit(&state, &claims, req).await?;
    Ok((StatusCode::CREATED, Json(request)))
}
