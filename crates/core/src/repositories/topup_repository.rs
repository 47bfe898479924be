use chrono::{DateTime, Utc};
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::ReviewStatus;
use fundbridge_primitives::models::entities::topup_request::{NewTopUpRequest, TopUpRequestRow};
use fundbridge_primitives::schema::topup_requests;
use uuid::Uuid;

pub struct TopUpRepository;

impl TopUpRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_request: NewTopUpRequest,
    ) -> Result<TopUpRequestRow, ApiError> {
        diesel::insert_into(topup_requests::table)
            .values(&new_request)
            .get_result::<TopUpRequestRow>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<TopUpRequestRow>, ApiError> {
        topup_requests::table
            .filter(topup_requests::user_id.eq(user_id))
            .order(topup_requests::created_at.desc())
            .load::<TopUpRequestRow>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_pending(conn: &mut PgConnection) -> Result<Vec<TopUpRequestRow>, ApiError> {
        topup_requests::table
            .filter(topup_requests::status.eq(ReviewStatus::Pending))
            .order(topup_requests::created_at.asc())
            .load::<TopUpRequestRow>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_for_update(
        conn: &mut PgConnection,
        request_id: Uuid,
    ) -> Result<Option<TopUpRequestRow>, ApiError> {
        topup_requests::table
            .find(request_id)
            .for_update()
            .first::<TopUpRequestRow>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn mark_reviewed(
        conn: &mut PgConnection,
        request_id: Uuid,
        status: ReviewStatus,
        reviewer_id: Uuid,
        comment: Option<&str>,
    ) -> Result<TopUpRequestRow, ApiError> {
        diesel::update(topup_requests::table.find(request_id))
            .set((
                topup_requests::status.eq(status),
                topup_requests::reviewed_by.eq(reviewer_id),
                topup_requests::reviewed_at.eq(Utc::now()),
                topup_requests::review_comment.eq(comment),
                topup_requests::updated_at.eq(Utc::now()),
            ))
            .get_result::<TopUpRequestRow>(conn)
            .map_err(ApiError::from)
    }

    /// Maintenance: flip stale pending claims to rejected with a system
    /// comment. Returns how many rows were expired.
    pub fn expire_stale_pending(
        conn: &mut PgConnection,
        cutoff: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::update(
            topup_requests::table
                .filter(topup_requests::status.eq(ReviewStatus::Pending))
                .filter(topup_requests::created_at.lt(cutoff)),
        )
        .set((
            topup_requests::status.eq(ReviewStatus::Rejected),
            topup_requests::review_comment.eq("Expired: no confirmation received"),
            topup_requests::reviewed_at.eq(Utc::now()),
            topup_requests::updated_at.eq(Utc::now()),
        ))
        .execute(conn)
        .map_err(ApiError::from)
    }
}
