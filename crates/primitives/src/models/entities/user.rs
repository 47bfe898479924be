use crate::models::entities::enum_types::AccountType;
use crate::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// A platform user. `subject_id` is the opaque id issued by the external
/// identity provider; the row is created on first profile upsert and is
/// never hard-deleted (`suspended` flips instead).
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = users)]
pub struct User {
    pub id: Uuid,
    pub subject_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub has_borrower_account: bool,
    pub has_investor_account: bool,
    pub current_account_type: AccountType,
    pub is_admin: bool,
    pub suspended: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub subject_id: &'a str,
    pub display_name: &'a str,
    pub email: Option<&'a str>,
    pub current_account_type: AccountType,
}
