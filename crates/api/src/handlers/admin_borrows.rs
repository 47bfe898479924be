use axum::extract::{Extension, Json, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::borrow_service::BorrowService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::BorrowsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/admin/borrow",
    responses(
        (status = 200, description = "Pending borrow requests, oldest first", body = BorrowsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn pending_borrows(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<BorrowsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ReviewBorrowRequests)?;

    let borrows = BorrowService::list_pending(&state).await?;
    Ok(Json(borrows))
}
