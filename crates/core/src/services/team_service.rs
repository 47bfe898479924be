use crate::app_state::AppState;
use crate::repositories::team_repository::TeamRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::audit_service::AuditService;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::{TeamPermissionsResponse, UpdateTeamPermissionsRequest};
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use uuid::Uuid;

pub struct TeamService;

impl TeamService {
    pub async fn permissions_of(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<TeamPermissionsResponse, ApiError> {
        let mut conn = state.db.get()?;

        UserRepository::find_by_id(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("User".into()))?;
        let capabilities = TeamRepository::capabilities_of(&mut conn, user_id)?;

        Ok(TeamPermissionsResponse {
            user_id,
            capabilities,
        })
    }

    pub async fn replace_permissions(
        state: &AppState,
        reviewer: &User,
        user_id: Uuid,
        req: UpdateTeamPermissionsRequest,
    ) -> Result<TeamPermissionsResponse, ApiError> {
        let mut conn = state.db.get()?;

        UserRepository::find_by_id(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("User".into()))?;
        TeamRepository::replace(&mut conn, user_id, &req.capabilities)?;

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "team_permissions_updated",
            Some("user"),
            Some(&user_id.to_string()),
            json!({ "capabilities": req.capabilities }),
            None,
        )
        .await?;

        Ok(TeamPermissionsResponse {
            user_id,
            capabilities: req.capabilities,
        })
    }
}
