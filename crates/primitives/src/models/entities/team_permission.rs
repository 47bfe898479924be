use crate::schema::team_permissions;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// One granted capability tag per row. The tag is stored as text and parsed
/// into [`crate::models::entities::enum_types::Capability`] on read.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = team_permissions)]
pub struct TeamPermission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub capability: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = team_permissions)]
pub struct NewTeamPermission {
    pub user_id: Uuid,
    pub capability: String,
}
