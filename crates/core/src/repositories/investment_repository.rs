use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::ReviewStatus;
use fundbridge_primitives::models::entities::investment_request::{
    InvestmentRequest, NewInvestmentRequest,
};
use fundbridge_primitives::schema::investment_requests;
use uuid::Uuid;

pub struct InvestmentRepository;

impl InvestmentRepository {
    /// Any prior request for the pair, in any status, blocks a new one.
    pub fn exists_for(
        conn: &mut PgConnection,
        project_id: Uuid,
        investor_id: Uuid,
    ) -> Result<bool, ApiError> {
        investment_requests::table
            .filter(investment_requests::project_id.eq(project_id))
            .filter(investment_requests::investor_id.eq(investor_id))
            .select(investment_requests::id)
            .first::<Uuid>(conn)
            .optional()
            .map(|found| found.is_some())
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        new_request: NewInvestmentRequest,
    ) -> Result<InvestmentRequest, ApiError> {
        diesel::insert_into(investment_requests::table)
            .values(&new_request)
            .get_result::<InvestmentRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        request_id: Uuid,
    ) -> Result<Option<InvestmentRequest>, ApiError> {
        investment_requests::table
            .find(request_id)
            .first::<InvestmentRequest>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Row-locked load used by the review transaction so concurrent reviews
    /// of the same request serialize.
    pub fn find_for_update(
        conn: &mut PgConnection,
        request_id: Uuid,
    ) -> Result<Option<InvestmentRequest>, ApiError> {
        investment_requests::table
            .find(request_id)
            .for_update()
            .first::<InvestmentRequest>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_pending(conn: &mut PgConnection) -> Result<Vec<InvestmentRequest>, ApiError> {
        investment_requests::table
            .filter(investment_requests::status.eq(ReviewStatus::Pending))
            .order(investment_requests::created_at.asc())
            .load::<InvestmentRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_project(
        conn: &mut PgConnection,
        project_id: Uuid,
    ) -> Result<Vec<InvestmentRequest>, ApiError> {
        investment_requests::table
            .filter(investment_requests::project_id.eq(project_id))
            .order(investment_requests::created_at.asc())
            .load::<InvestmentRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_investor(
        conn: &mut PgConnection,
        investor_id: Uuid,
    ) -> Result<Vec<InvestmentRequest>, ApiError> {
        investment_requests::table
            .filter(investment_requests::investor_id.eq(investor_id))
            .order(investment_requests::created_at.desc())
            .load::<InvestmentRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn mark_reviewed(
        conn: &mut PgConnection,
        request_id: Uuid,
        status: ReviewStatus,
        reviewer_id: Uuid,
        comment: Option<&str>,
    ) -> Result<InvestmentRequest, ApiError> {
        diesel::update(investment_requests::table.find(request_id))
            .set((
                investment_requests::status.eq(status),
                investment_requests::reviewed_by.eq(reviewer_id),
                investment_requests::reviewed_at.eq(Utc::now()),
                investment_requests::review_comment.eq(comment),
                investment_requests::updated_at.eq(Utc::now()),
            ))
            .get_result::<InvestmentRequest>(conn)
            .map_err(ApiError::from)
    }
}
