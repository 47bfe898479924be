use crate::app_state::AppState;
use crate::eligibility;
use crate::repositories::funding_repository::FundingRepository;
use crate::repositories::investment_repository::InvestmentRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::project_repository::ProjectRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::security::Claims;
use crate::services::audit_service::AuditService;
use diesel::prelude::*;
use fundbridge_primitives::error::{ApiError, BusinessError};
use fundbridge_primitives::models::dtos::{
    InvestSubmitRequest, InvestmentRequestDto, InvestmentsResponse, ReviewAction,
    ReviewDecisionRequest,
};
use fundbridge_primitives::models::entities::enum_types::{ProjectStatus, ReviewStatus};
use fundbridge_primitives::models::entities::investment_request::NewInvestmentRequest;
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct InvestmentService;

impl InvestmentService {
    /// Submission path: none -> pending. All checks run against current
    /// state; the UNIQUE (project_id, investor_id) index backstops the
    /// duplicate pre-check under concurrent submissions.
    pub async fn submit(
        state: &AppState,
        claims: &Claims,
        project_id: Uuid,
        req: InvestSubmitRequest,
    ) -> Result<InvestmentRequestDto, ApiError> {
        let mut conn = state.db.get()?;

        let investor = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        if investor.suspended {
            return Err(BusinessError::AccountSuspended.into());
        }

        let project = ProjectRepository::find_by_id(&mut conn, project_id)?
            .ok_or_else(|| ApiError::NotFound("Project".into()))?;

        if !project.is_open_for_funding() {
            return Err(BusinessError::ProjectNotOpen.into());
        }

        if project.borrower_id == investor.id {
            return Err(BusinessError::SelfInvestment.into());
        }

        // One request per (project, investor), ever, regardless of status.
        if InvestmentRepository::exists_for(&mut conn, project_id, investor.id)? {
            return Err(BusinessError::DuplicateRequest.into());
        }

        let balance = WalletRepository::balance_of(&mut conn, investor.id)?;
        if req.amount > balance {
            return Err(BusinessError::InsufficientBalance {
                balance,
                required: req.amount,
            }
            .into());
        }

        let profile = ProfileRepository::find_investor(&mut conn, investor.id)?;
        let income = eligibility::effective_income(profile.as_ref());
        let limit = eligibility::compute_limit(income);
        if req.amount > limit.max_amount {
            return Err(BusinessError::LimitExceeded {
                annual_income: limit.annual_income,
                max_percentage: limit.max_percentage,
                max_amount: limit.max_amount,
                requested: req.amount,
            }
            .into());
        }

        let request = InvestmentRepository::create(
            &mut conn,
            NewInvestmentRequest {
                project_id,
                investor_id: investor.id,
                amount: req.amount,
                annual_income: limit.annual_income,
                max_percentage: limit.max_percentage,
                max_amount: limit.max_amount,
                status: ReviewStatus::Pending,
            },
        )
        .map_err(|e| match e {
            ApiError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            )) => BusinessError::DuplicateRequest.into(),
            other => other,
        })?;

        info!(
            request_id = %request.id,
            project_id = %project_id,
            amount = req.amount,
            "investment request submitted"
        );

        Ok(InvestmentRequestDto::from(request))
    }

    /// Review path: pending -> approved | rejected, one database
    /// transaction. Approval re-checks wallet sufficiency at review time;
    /// the guarded debit and the funding-ledger update commit together or
    /// not at all.
    pub async fn review(
        state: &AppState,
        reviewer: &User,
        request_id: Uuid,
        decision: ReviewDecisionRequest,
    ) -> Result<InvestmentRequestDto, ApiError> {
        let mut conn = state.db.get()?;
        let comment = decision.comment.as_deref();

        let reviewed = conn.transaction::<_, ApiError, _>(|conn| {
            let request = InvestmentRepository::find_for_update(conn, request_id)?
                .ok_or_else(|| ApiError::NotFound("Investment request".into()))?;

            if request.status != ReviewStatus::Pending {
                return Err(BusinessError::AlreadyReviewed {
                    status: request.status.to_string(),
                }
                .into());
            }

            match decision.action {
                ReviewAction::Reject => InvestmentRepository::mark_reviewed(
                    conn,
                    request_id,
                    ReviewStatus::Rejected,
                    reviewer.id,
                    comment,
                ),
                ReviewAction::Approve => {
                    let debited = WalletRepository::debit_if_sufficient(
                        conn,
                        request.investor_id,
                        request.amount,
                    )?;

                    if debited.is_none() {
                        let balance = WalletRepository::balance_of(conn, request.investor_id)?;
                        return Err(BusinessError::InsufficientBalance {
                            balance,
                            required: request.amount,
                        }
                        .into());
                    }

                    FundingRepository::upsert_contribution(
                        conn,
                        request.project_id,
                        request.investor_id,
                        request.amount,
                    )?;

                    let total = ProjectRepository::add_funding(
                        conn,
                        request.project_id,
                        request.amount,
                    )?;

                    let project = ProjectRepository::find_by_id(conn, request.project_id)?
                        .ok_or_else(|| ApiError::NotFound("Project".into()))?;
                    if total >= project.funding_goal && project.status == ProjectStatus::Active {
                        ProjectRepository::set_status(
                            conn,
                            request.project_id,
                            ProjectStatus::Funded,
                        )?;
                    }

                    InvestmentRepository::mark_reviewed(
                        conn,
                        request_id,
                        ReviewStatus::Approved,
                        reviewer.id,
                        comment,
                    )
                }
            }
        })?;

        info!(
            request_id = %request_id,
            status = %reviewed.status,
            "investment request reviewed"
        );

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "investment_reviewed",
            Some("investment_request"),
            Some(&request_id.to_string()),
            json!({ "status": reviewed.status.to_string(), "amount": reviewed.amount }),
            None,
        )
        .await?;

        Ok(InvestmentRequestDto::from(reviewed))
    }

    pub async fn list_pending(state: &AppState) -> Result<InvestmentsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let requests = InvestmentRepository::list_pending(&mut conn)?;

        Ok(InvestmentsResponse {
            requests: requests.into_iter().map(InvestmentRequestDto::from).collect(),
        })
    }

    pub async fn list_mine(
        state: &AppState,
        claims: &Claims,
    ) -> Result<InvestmentsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let investor = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let requests = InvestmentRepository::list_by_investor(&mut conn, investor.id)?;

        Ok(InvestmentsResponse {
            requests: requests.into_iter().map(InvestmentRequestDto::from).collect(),
        })
    }
}
