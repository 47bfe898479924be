use axum::extract::{Extension, Json, State};
use fundbridge_core::services::topup_service::TopUpService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{TopUpDto, TopUpSubmitRequest};
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/topup",
    request_body = TopUpSubmitRequest,
    responses(
        (status = 201, description = "Top-up claim recorded", body = TopUpDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Wallet"
)]
pub async fn submit_top_up(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<TopUpSubmitRequest>,
) -> Result<(StatusCode, Json<TopUpDto>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let topup = TopUpService::submit(&state, &claims, req).await?;
    Ok((StatusCode::CREATED, Json(topup)))
}
