use crate::models::entities::enum_types::ReviewStatus;
use crate::schema::investment_requests;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// An investor's offer to fund a project. The income and limit columns are a
/// snapshot of the eligibility inputs at submission time. UNIQUE
/// (project_id, investor_id) holds one request per pair, ever.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = investment_requests)]
#[diesel(belongs_to(crate::models::entities::project::Project))]
pub struct InvestmentRequest {
    pub id: Uuid,
    pub project_id: Uuid,
    pub investor_id: Uuid,
    pub amount: i64,
    pub annual_income: i64,
    pub max_percentage: i16,
    pub max_amount: i64,
    pub status: ReviewStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = investment_requests)]
pub struct NewInvestmentRequest {
    pub project_id: Uuid,
    pub investor_id: Uuid,
    pub amount: i64,
    pub annual_income: i64,
    pub max_percentage: i16,
    pub max_amount: i64,
    pub status: ReviewStatus,
}
