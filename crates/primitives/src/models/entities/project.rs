use crate::models::entities::enum_types::{ProjectStatus, ReviewStatus};
use crate::schema::projects;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// A borrower's funding campaign. Workflow state lives in typed columns with
/// enum statuses; `total_funded` accumulates approved investments and is only
/// mutated inside the approval transaction.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = projects)]
pub struct Project {
    pub id: Uuid,
    pub borrower_id: Uuid,
    pub title: String,
    pub summary: String,
    pub funding_goal: i64,
    pub tenor_months: i32,
    pub interest_rate_bps: i32,
    pub status: ProjectStatus,
    pub approval_status: ReviewStatus,
    pub total_funded: i64,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// A project accepts investment requests only once an admin approved it
    /// and it has not been soft-deleted or closed.
    pub fn is_open_for_funding(&self) -> bool {
        self.approval_status == ReviewStatus::Approved && self.status == ProjectStatus::Active
    }
}

#[derive(Insertable)]
#[diesel(table_name = projects)]
pub struct NewProject<'a> {
    pub borrower_id: Uuid,
    pub title: &'a str,
    pub summary: &'a str,
    pub funding_goal: i64,
    pub tenor_months: i32,
    pub interest_rate_bps: i32,
    pub status: ProjectStatus,
    pub approval_status: ReviewStatus,
}
