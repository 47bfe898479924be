use crate::models::entities::enum_types::ReviewStatus;
use crate::schema::topup_requests;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// A claimed bank transfer awaiting back-office confirmation. Approval
/// credits the wallet by `amount`.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = topup_requests)]
pub struct TopUpRequestRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub bank_reference: String,
    pub status: ReviewStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = topup_requests)]
pub struct NewTopUpRequest<'a> {
    pub user_id: Uuid,
    pub amount: i64,
    pub bank_reference: &'a str,
    pub status: ReviewStatus,
}
