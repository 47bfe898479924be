use crate::models::entities::enum_types::ReviewStatus;
use crate::models::entities::TopUpRequestRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TopUpSubmitRequest {
    #[validate(range(min = 1, max = 1_000_000_000))]
    pub amount: i64,
    /// Free-form reference of the claimed bank transfer.
    #[validate(length(min = 4, max = 64))]
    pub bank_reference: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopUpDto {
    pub id: Uuid,
    pub amount: i64,
    pub bank_reference: String,
    pub status: ReviewStatus,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TopUpRequestRow> for TopUpDto {
    fn from(row: TopUpRequestRow) -> Self {
        Self {
            id: row.id,
            amount: row.amount,
            bank_reference: row.bank_reference,
            status: row.status,
            review_comment: row.review_comment,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopUpsResponse {
    pub topups: Vec<TopUpDto>,
}
