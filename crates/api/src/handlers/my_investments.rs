use axum::extract::{Extension, Json, State};
use fundbridge_core::services::investment_service::InvestmentService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::InvestmentsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/investments",
    responses(
        (status = 200, description = "Caller's investment requests, newest first", body = InvestmentsResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Investments"
)]
pub async fn my_investments(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<InvestmentsResponse>, ApiError> {
    let investments = InvestmentService::list_mine(&state, &claims).await?;
    Ok(Json(investments))
}
