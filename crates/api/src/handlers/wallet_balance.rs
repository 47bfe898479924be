use axum::extract::{Extension, Json, State};
use fundbridge_core::services::wallet_service::WalletService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::WalletResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/wallet",
    responses(
        (status = 200, description = "Current wallet balance", body = WalletResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not yet provisioned")
    ),
    security(("bearerAuth" = [])),
    tag = "Wallet"
)]
pub async fn wallet_balance(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<WalletResponse>, ApiError> {
    let wallet = WalletService::balance(&state, &claims).await?;
    Ok(Json(wallet))
}
