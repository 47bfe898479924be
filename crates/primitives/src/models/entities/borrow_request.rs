use crate::models::entities::enum_types::ReviewStatus;
use crate::schema::borrow_requests;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = borrow_requests)]
pub struct BorrowRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub purpose: String,
    pub status: ReviewStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = borrow_requests)]
pub struct NewBorrowRequest<'a> {
    pub user_id: Uuid,
    pub amount: i64,
    pub purpose: &'a str,
    pub status: ReviewStatus,
}
