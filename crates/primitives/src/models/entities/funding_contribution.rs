use crate::schema::funding_contributions;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// Per-project funding ledger entry, one row per contributing investor.
/// Approvals for the same investor sum into the existing row.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = funding_contributions)]
#[diesel(belongs_to(crate::models::entities::project::Project))]
pub struct FundingContribution {
    pub id: Uuid,
    pub project_id: Uuid,
    pub investor_id: Uuid,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = funding_contributions)]
pub struct NewFundingContribution {
    pub project_id: Uuid,
    pub investor_id: Uuid,
    pub amount: i64,
}
