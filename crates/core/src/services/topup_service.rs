use crate::app_state::AppState;
use crate::repositories::topup_repository::TopUpRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::security::Claims;
use crate::services::audit_service::AuditService;
use diesel::prelude::*;
use fundbridge_primitives::error::{ApiError, BusinessError};
use fundbridge_primitives::models::dtos::{
    ReviewAction, ReviewDecisionRequest, TopUpDto, TopUpSubmitRequest, TopUpsResponse,
};
use fundbridge_primitives::models::entities::enum_types::ReviewStatus;
use fundbridge_primitives::models::entities::topup_request::NewTopUpRequest;
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct TopUpService;

impl TopUpService {
    pub async fn submit(
        state: &AppState,
        claims: &Claims,
        req: TopUpSubmitRequest,
    ) -> Result<TopUpDto, ApiError> {
        let mut conn = state.db.get()?;

        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        if user.suspended {
            return Err(BusinessError::AccountSuspended.into());
        }

        let row = TopUpRepository::create(
            &mut conn,
            NewTopUpRequest {
                user_id: user.id,
                amount: req.amount,
                bank_reference: &req.bank_reference,
                status: ReviewStatus::Pending,
            },
        )?;

        info!(topup_id = %row.id, amount = req.amount, "top-up claim submitted");

        Ok(TopUpDto::from(row))
    }

    pub async fn history(state: &AppState, claims: &Claims) -> Result<TopUpsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let rows = TopUpRepository::list_by_user(&mut conn, user.id)?;

        Ok(TopUpsResponse {
            topups: rows.into_iter().map(TopUpDto::from).collect(),
        })
    }

    pub async fn list_pending(state: &AppState) -> Result<TopUpsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let rows = TopUpRepository::list_pending(&mut conn)?;

        Ok(TopUpsResponse {
            topups: rows.into_iter().map(TopUpDto::from).collect(),
        })
    }

    /// Approval credits the wallet inside the same transaction that flips
    /// the claim out of pending, so a crash cannot credit twice or lose the
    /// status change.
    pub async fn review(
        state: &AppState,
        reviewer: &User,
        request_id: Uuid,
        decision: ReviewDecisionRequest,
    ) -> Result<TopUpDto, ApiError> {
        let mut conn = state.db.get()?;
        let comment = decision.comment.as_deref();

        let reviewed = conn.transaction::<_, ApiError, _>(|conn| {
            let request = TopUpRepository::find_for_update(conn, request_id)?
                .ok_or_else(|| ApiError::NotFound("Top-up request".into()))?;

            if request.status != ReviewStatus::Pending {
                return Err(BusinessError::AlreadyReviewed {
                    status: request.status.to_string(),
                }
                .into());
            }

            match decision.action {
                ReviewAction::Reject => TopUpRepository::mark_reviewed(
                    conn,
                    request_id,
                    ReviewStatus::Rejected,
                    reviewer.id,
                    comment,
                ),
                ReviewAction::Approve => {
                    WalletRepository::credit(conn, request.user_id, request.amount)?;
                    TopUpRepository::mark_reviewed(
                        conn,
                        request_id,
                        ReviewStatus::Approved,
                        reviewer.id,
                        comment,
                    )
                }
            }
        })?;

        info!(topup_id = %request_id, status = %reviewed.status, "top-up claim reviewed");

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "topup_reviewed",
            Some("topup_request"),
            Some(&request_id.to_string()),
            json!({ "status": reviewed.status.to_string(), "amount": reviewed.amount }),
            None,
        )
        .await?;

        Ok(TopUpDto::from(reviewed))
    }
}
