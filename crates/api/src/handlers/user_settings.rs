use axum::extract::{Extension, Json, State};
use fundbridge_core::services::settings_service::SettingsService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{SettingsDto, UpdateSettingsRequest};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "User settings (defaults when never saved)", body = SettingsDto),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Settings"
)]
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<SettingsDto>, ApiError> {
    let settings = SettingsService::get(&state, &claims).await?;
    Ok(Json(settings))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings saved", body = SettingsDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Settings"
)]
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsDto>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let settings = SettingsService::update(&state, &claims, req).await?;
    Ok(Json(settings))
}
