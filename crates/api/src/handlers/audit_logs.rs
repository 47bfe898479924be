use axum::extract::{Extension, Json, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::audit_service::AuditService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::AuditLogsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/admin/audit",
    responses(
        (status = 200, description = "Recent audit events, newest first", body = AuditLogsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_audit_logs(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AuditLogsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::ViewAuditLogs)?;

    let logs = AuditService::list_recent(&state).await?;
    Ok(Json(logs))
}
