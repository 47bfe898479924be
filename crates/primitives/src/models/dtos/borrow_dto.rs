use crate::models::entities::enum_types::ReviewStatus;
use crate::models::entities::BorrowRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct BorrowSubmitRequest {
    #[validate(range(min = 1, max = 1_000_000_000))]
    pub amount: i64,
    #[validate(length(min = 4, max = 500))]
    pub purpose: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowDto {
    pub id: Uuid,
    pub amount: i64,
    pub purpose: String,
    pub status: ReviewStatus,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BorrowRequest> for BorrowDto {
    fn from(row: BorrowRequest) -> Self {
        Self {
            id: row.id,
            amount: row.amount,
            purpose: row.purpose,
            status: row.status,
            review_comment: row.review_comment,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowsResponse {
    pub requests: Vec<BorrowDto>,
}
