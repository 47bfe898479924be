use crate::app_state::AppState;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use crate::services::audit_service::AuditService;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::{
    AccountTypeRequest, BorrowerProfileDto, InvestorProfileDto, ProfileResponse,
    UpdateBorrowerProfileRequest, UpdateInvestorProfileRequest, UpdateVerificationRequest,
    UpsertProfileRequest,
};
use fundbridge_primitives::models::entities::borrower_profile::NewBorrowerProfile;
use fundbridge_primitives::models::entities::user::NewUser;
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct ProfileService;

impl ProfileService {
    pub async fn current(state: &AppState, claims: &Claims) -> Result<ProfileResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        Ok(ProfileResponse::from(user))
    }

    /// First call provisions the user row for the verified subject; later
    /// calls update the mutable profile fields.
    pub async fn upsert(
        state: &AppState,
        claims: &Claims,
        req: UpsertProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        let mut conn = state.db.get()?;

        let user = match UserRepository::find_by_subject(&mut conn, claims.subject())? {
            Some(existing) => UserRepository::update_profile(
                &mut conn,
                existing.id,
                &req.display_name,
                req.email.as_deref(),
            )?,
            None => {
                let created = UserRepository::create(
                    &mut conn,
                    NewUser {
                        subject_id: claims.subject(),
                        display_name: &req.display_name,
                        email: req.email.as_deref(),
                        current_account_type: req.account_type,
                    },
                )?;
                info!(user_id = %created.id, "user provisioned");
                created
            }
        };

        Ok(ProfileResponse::from(user))
    }

    pub async fn switch_account_type(
        state: &AppState,
        claims: &Claims,
        req: AccountTypeRequest,
    ) -> Result<ProfileResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let updated = UserRepository::set_account_type(&mut conn, user.id, req.account_type)?;

        Ok(ProfileResponse::from(updated))
    }

    pub async fn investor_profile(
        state: &AppState,
        claims: &Claims,
    ) -> Result<Option<InvestorProfileDto>, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let profile = ProfileRepository::find_investor(&mut conn, user.id)?;

        Ok(profile.map(InvestorProfileDto::from))
    }

    pub async fn update_investor_profile(
        state: &AppState,
        claims: &Claims,
        req: UpdateInvestorProfileRequest,
    ) -> Result<InvestorProfileDto, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let profile = ProfileRepository::upsert_investor(&mut conn, user.id, req.annual_income)?;

        Ok(InvestorProfileDto::from(profile))
    }

    /// KYC decision on a declared income, back-office side.
    pub async fn set_investor_verification(
        state: &AppState,
        reviewer: &User,
        user_id: Uuid,
        req: UpdateVerificationRequest,
    ) -> Result<InvestorProfileDto, ApiError> {
        let mut conn = state.db.get()?;

        ProfileRepository::find_investor(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("Investor profile".into()))?;
        ProfileRepository::set_verification(&mut conn, user_id, req.verification)?;

        let profile = ProfileRepository::find_investor(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("Investor profile".into()))?;

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "investor_verification_updated",
            Some("user"),
            Some(&user_id.to_string()),
            json!({ "verification": req.verification }),
            None,
        )
        .await?;

        Ok(InvestorProfileDto::from(profile))
    }

    pub async fn borrower_profile(
        state: &AppState,
        claims: &Claims,
    ) -> Result<Option<BorrowerProfileDto>, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let profile = ProfileRepository::find_borrower(&mut conn, user.id)?;

        Ok(profile.map(BorrowerProfileDto::from))
    }

    pub async fn update_borrower_profile(
        state: &AppState,
        claims: &Claims,
        req: UpdateBorrowerProfileRequest,
    ) -> Result<BorrowerProfileDto, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let profile = ProfileRepository::upsert_borrower(
            &mut conn,
            NewBorrowerProfile {
                user_id: user.id,
                company_name: req.company_name.as_deref(),
                occupation: req.occupation.as_deref(),
                bio: req.bio.as_deref(),
            },
        )?;

        Ok(BorrowerProfileDto::from(profile))
    }
}
