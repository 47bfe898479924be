use axum::extract::{Extension, Json, State};
use fundbridge_core::services::topup_service::TopUpService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::TopUpsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/topup/history",
    responses(
        (status = 200, description = "Caller's top-up claims, newest first", body = TopUpsResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Wallet"
)]
pub async fn top_up_history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TopUpsResponse>, ApiError> {
    let history = TopUpService::history(&state, &claims).await?;
    Ok(Json(history))
}
