use crate::app_state::AppState;
use crate::repositories::audit_repository::AuditLogRepository;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::{AuditLogDto, AuditLogsResponse};
use fundbridge_primitives::models::entities::audit_log::NewAuditLog;
use uuid::Uuid;

const DEFAULT_PAGE: i64 = 200;

pub struct AuditService;

impl AuditService {
    pub async fn log_event(
        state: &AppState,
        user_id: Option<Uuid>,
        event_type: &str,
        target_type: Option<&str>,
        target_id: Option<&str>,
        metadata: serde_json::Value,
        ip_address: Option<String>,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;

        AuditLogRepository::create(
            &mut conn,
            NewAuditLog {
                user_id,
                event_type: event_type.to_string(),
                target_type: target_type.map(|s| s.to_string()),
                target_id: target_id.map(|s| s.to_string()),
                metadata,
                ip_address,
            },
        )
    }

    pub async fn list_recent(state: &AppState) -> Result<AuditLogsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let logs = AuditLogRepository::list_recent(&mut conn, DEFAULT_PAGE)?;

        Ok(AuditLogsResponse {
            logs: logs.into_iter().map(AuditLogDto::from).collect(),
        })
    }
}
