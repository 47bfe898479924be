use axum::extract::{Extension, Json, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::topup_service::TopUpService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::TopUpsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/admin/topups",
    responses(
        (status = 200, description = "Pending top-up claims, oldest first", body = TopUpsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn pending_top_ups(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TopUpsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ReviewTopUps)?;

    let topups = TopUpService::list_pending(&state).await?;
    Ok(Json(topups))
}
