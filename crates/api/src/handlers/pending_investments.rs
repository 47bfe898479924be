use axum::extract::{Extension, Json, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::investment_service::InvestmentService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::InvestmentsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/admin/investments",
    responses(
        (status = 200, description = "Pending investment requests, oldest first", body = InvestmentsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn pending_investments(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<InvestmentsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ReviewInvestments)?;

    let investments = InvestmentService::list_pending(&state).await?;
    Ok(Json(investments))
}
