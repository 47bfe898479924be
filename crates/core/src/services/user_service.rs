use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use crate::services::audit_service::AuditService;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::{AdminUserDto, AdminUsersResponse, UserFlagsRequest};
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct UserService;

impl UserService {
    pub async fn list_all(state: &AppState) -> Result<AdminUsersResponse, ApiError> {
        let mut conn = state.db.get()?;
        let users = UserRepository::list_all(&mut conn)?;

        Ok(AdminUsersResponse {
            users: users.into_iter().map(AdminUserDto::from).collect(),
        })
    }

    pub async fn set_flags(
        state: &AppState,
        reviewer: &User,
        user_id: Uuid,
        req: UserFlagsRequest,
    ) -> Result<AdminUserDto, ApiError> {
        let mut conn = state.db.get()?;
        let updated = UserRepository::set_flags(&mut conn, user_id, req.is_admin, req.suspended)?;

        info!(user_id = %user_id, is_admin = updated.is_admin, suspended = updated.suspended, "user flags updated");

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "user_flags_updated",
            Some("user"),
            Some(&user_id.to_string()),
            json!({ "is_admin": updated.is_admin, "suspended": updated.suspended }),
            None,
        )
        .await?;

        Ok(AdminUserDto::from(updated))
    }
}
