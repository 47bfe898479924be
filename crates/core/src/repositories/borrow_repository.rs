use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::borrow_request::{BorrowRequest, NewBorrowRequest};
use fundbridge_primitives::models::entities::enum_types::ReviewStatus;
use fundbridge_primitives::schema::borrow_requests;
use uuid::Uuid;

pub struct BorrowRepository;

impl BorrowRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_request: NewBorrowRequest,
    ) -> Result<BorrowRequest, ApiError> {
        diesel::insert_into(borrow_requests::table)
            .values(&new_request)
            .get_result::<BorrowRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<BorrowRequest>, ApiError> {
        borrow_requests::table
            .filter(borrow_requests::user_id.eq(user_id))
            .order(borrow_requests::created_at.desc())
            .load::<BorrowRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_pending(conn: &mut PgConnection) -> Result<Vec<BorrowRequest>, ApiError> {
        borrow_requests::table
            .filter(borrow_requests::status.eq(ReviewStatus::Pending))
            .order(borrow_requests::created_at.asc())
            .load::<BorrowRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_for_update(
        conn: &mut PgConnection,
        request_id: Uuid,
    ) -> Result<Option<BorrowRequest>, ApiError> {
        borrow_requests::table
            .find(request_id)
            .for_update()
            .first::<BorrowRequest>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn mark_reviewed(
        conn: &mut PgConnection,
        request_id: Uuid,
        status: ReviewStatus,
        reviewer_id: Uuid,
        comment: Option<&str>,
    ) -> Result<BorrowRequest, ApiError> {
        diesel::update(borrow_requests::table.find(request_id))
            .set((
                borrow_requests::status.eq(status),
                borrow_requests::reviewed_by.eq(reviewer_id),
                borrow_requests::reviewed_at.eq(Utc::now()),
                borrow_requests::review_comment.eq(comment),
                borrow_requests::updated_at.eq(Utc::now()),
            ))
            .get_result::<BorrowRequest>(conn)
            .map_err(ApiError::from)
    }
}
