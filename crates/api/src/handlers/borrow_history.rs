use axum::extract::{Extension, Json, State};
use fundbridge_core::services::borrow_service::BorrowService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::BorrowsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/borrow/history",
    responses(
        (status = 200, description = "Caller's borrow requests, newest first", body = BorrowsResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Borrowing"
)]
pub async fn borrow_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<BorrowsResponse>, ApiError> {
    let history = BorrowService::history(&state, &claims).await?;
    Ok(Json(history))
}
