use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::funding_contribution::{
    FundingContribution, NewFundingContribution,
};
use fundbridge_primitives::schema::funding_contributions;
use uuid::Uuid;

pub struct FundingRepository;

impl FundingRepository {
    /// One ledger row per (project, investor); repeat approvals sum into it.
    pub fn upsert_contribution(
        conn: &mut PgConnection,
        project_id: Uuid,
        investor_id: Uuid,
        amount: i64,
    ) -> Result<FundingContribution, ApiError> {
        diesel::insert_into(funding_contributions::table)
            .values(&NewFundingContribution {
                project_id,
                investor_id,
                amount,
            })
            .on_conflict((
                funding_contributions::project_id,
                funding_contributions::investor_id,
            ))
            .do_update()
            .set((
                funding_contributions::amount.eq(funding_contributions::amount + amount),
                funding_contributions::updated_at.eq(Utc::now()),
            ))
            .get_result::<FundingContribution>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_project(
        conn: &mut PgConnection,
        project_id: Uuid,
    ) -> Result<Vec<FundingContribution>, ApiError> {
        funding_contributions::table
            .filter(funding_contributions::project_id.eq(project_id))
            .order(funding_contributions::created_at.asc())
            .load::<FundingContribution>(conn)
            .map_err(ApiError::from)
    }
}
