use crate::models::entities::enum_types::{AccountType, Capability};
use crate::models::entities::{AuditLog, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    Reject,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ReviewDecisionRequest {
    pub action: ReviewAction,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFlagsRequest {
    pub is_admin: Option<bool>,
    pub suspended: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminUserDto {
    pub id: Uuid,
    pub subject_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub current_account_type: AccountType,
    pub is_admin: bool,
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            subject_id: user.subject_id,
            display_name: user.display_name,
            email: user.email,
            current_account_type: user.current_account_type,
            is_admin: user.is_admin,
            suspended: user.suspended,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamPermissionsResponse {
    pub user_id: Uuid,
    pub capabilities: Vec<Capability>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamPermissionsRequest {
    pub capabilities: Vec<Capability>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuditLogDto {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub event_type: String,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogDto {
    fn from(log: AuditLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            event_type: log.event_type,
            target_type: log.target_type,
            target_id: log.target_id,
            metadata: log.metadata,
            created_at: log.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuditLogsResponse {
    pub logs: Vec<AuditLogDto>,
}
