use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::VerificationStatus;
use fundbridge_primitives::models::entities::{
    BorrowerProfile, InvestorProfile, NewBorrowerProfile, NewInvestorProfile,
};
use fundbridge_primitives::schema::{borrower_profiles, investor_profiles};
use uuid::Uuid;

pub struct ProfileRepository;

impl ProfileRepository {
    pub fn find_investor(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<InvestorProfile>, ApiError> {
        investor_profiles::table
            .find(user_id)
            .first::<InvestorProfile>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// A fresh income declaration re-enters review; verification is an
    /// admin-side decision.
    pub fn upsert_investor(
        conn: &mut PgConnection,
        user_id: Uuid,
        annual_income: Option<i64>,
    ) -> Result<InvestorProfile, ApiError> {
        diesel::insert_into(investor_profiles::table)
            .values(&NewInvestorProfile {
                user_id,
                annual_income,
                verification: VerificationStatus::PendingReview,
            })
            .on_conflict(investor_profiles::user_id)
            .do_update()
            .set((
                investor_profiles::annual_income.eq(annual_income),
                investor_profiles::verification.eq(VerificationStatus::PendingReview),
                investor_profiles::updated_at.eq(Utc::now()),
            ))
            .get_result::<InvestorProfile>(conn)
            .map_err(ApiError::from)
    }

    pub fn set_verification(
        conn: &mut PgConnection,
        user_id: Uuid,
        verification: VerificationStatus,
    ) -> Result<(), ApiError> {
        diesel::update(investor_profiles::table.find(user_id))
            .set((
                investor_profiles::verification.eq(verification),
                investor_profiles::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn find_borrower(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<BorrowerProfile>, ApiError> {
        borrower_profiles::table
            .find(user_id)
            .first::<BorrowerProfile>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn upsert_borrower(
        conn: &mut PgConnection,
        profile: NewBorrowerProfile,
    ) -> Result<BorrowerProfile, ApiError> {
        diesel::insert_into(borrower_profiles::table)
            .values(&profile)
            .on_conflict(borrower_profiles::user_id)
            .do_update()
            .set((
                borrower_profiles::company_name.eq(profile.company_name),
                borrower_profiles::occupation.eq(profile.occupation),
                borrower_profiles::bio.eq(profile.bio),
                borrower_profiles::updated_at.eq(Utc::now()),
            ))
            .get_result::<BorrowerProfile>(conn)
            .map_err(ApiError::from)
    }
}
