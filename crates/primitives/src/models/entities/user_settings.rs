use crate::schema::user_settings;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = user_settings)]
#[diesel(primary_key(user_id))]
pub struct UserSettings {
    pub user_id: Uuid,
    pub notifications_enabled: bool,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = user_settings)]
pub struct NewUserSettings<'a> {
    pub user_id: Uuid,
    pub notifications_enabled: bool,
    pub language: &'a str,
}
