use crate::models::entities::enum_types::ReviewStatus;
use crate::models::entities::InvestmentRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct InvestSubmitRequest {
    #[validate(range(min = 1, max = 10_000_000_000))]
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestmentRequestDto {
    pub id: Uuid,
    pub project_id: Uuid,
    pub investor_id: Uuid,
    pub amount: i64,
    pub annual_income: i64,
    pub max_percentage: i16,
    pub max_amount: i64,
    pub status: ReviewStatus,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<InvestmentRequest> for InvestmentRequestDto {
    fn from(request: InvestmentRequest) -> Self {
        Self {
            id: request.id,
            project_id: request.project_id,
            investor_id: request.investor_id,
            amount: request.amount,
            annual_income: request.annual_income,
            max_percentage: request.max_percentage,
            max_amount: request.max_amount,
            status: request.status,
            review_comment: request.review_comment,
            created_at: request.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestmentsResponse {
    pub requests: Vec<InvestmentRequestDto>,
}
