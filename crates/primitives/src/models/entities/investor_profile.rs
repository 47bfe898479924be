use crate::models::entities::enum_types::VerificationStatus;
use crate::schema::investor_profiles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = investor_profiles)]
#[diesel(primary_key(user_id))]
pub struct InvestorProfile {
    pub user_id: Uuid,
    pub annual_income: Option<i64>,
    pub verification: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = investor_profiles)]
pub struct NewInvestorProfile {
    pub user_id: Uuid,
    pub annual_income: Option<i64>,
    pub verification: VerificationStatus,
}
