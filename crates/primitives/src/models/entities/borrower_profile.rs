use crate::schema::borrower_profiles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = borrower_profiles)]
#[diesel(primary_key(user_id))]
pub struct BorrowerProfile {
    pub user_id: Uuid,
    pub company_name: Option<String>,
    pub occupation: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = borrower_profiles)]
pub struct NewBorrowerProfile<'a> {
    pub user_id: Uuid,
    pub company_name: Option<&'a str>,
    pub occupation: Option<&'a str>,
    pub bio: Option<&'a str>,
}
