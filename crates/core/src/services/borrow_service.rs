use crate::app_state::AppState;
use crate::repositories::borrow_repository::BorrowRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use crate::services::audit_service::AuditService;
use diesel::prelude::*;
use fundbridge_primitives::error::{ApiError, BusinessError};
use fundbridge_primitives::models::dtos::{
    BorrowDto, BorrowSubmitRequest, BorrowsResponse, ReviewAction, ReviewDecisionRequest,
};
use fundbridge_primitives::models::entities::borrow_request::NewBorrowRequest;
use fundbridge_primitives::models::entities::enum_types::ReviewStatus;
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct BorrowService;

impl BorrowService {
    pub async fn submit(
        state: &AppState,
        claims: &Claims,
        req: BorrowSubmitRequest,
    ) -> Result<BorrowDto, ApiError> {
        let mut conn = state.db.get()?;

        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        if user.suspended {
            return Err(BusinessError::AccountSuspended.into());
        }
        if !user.has_borrower_account {
            return Err(ApiError::Forbidden(
                "A borrower account is required to request a loan".into(),
            ));
        }

        let row = BorrowRepository::create(
            &mut conn,
            NewBorrowRequest {
                user_id: user.id,
                amount: req.amount,
                purpose: &req.purpose,
                status: ReviewStatus::Pending,
            },
        )?;

        info!(borrow_id = %row.id, amount = req.amount, "borrow request submitted");

        Ok(BorrowDto::from(row))
    }

    pub async fn history(state: &AppState, claims: &Claims) -> Result<BorrowsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let rows = BorrowRepository::list_by_user(&mut conn, user.id)?;

        Ok(BorrowsResponse {
            requests: rows.into_iter().map(BorrowDto::from).collect(),
        })
    }

    pub async fn list_pending(state: &AppState) -> Result<BorrowsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let rows = BorrowRepository::list_pending(&mut conn)?;

        Ok(BorrowsResponse {
            requests: rows.into_iter().map(BorrowDto::from).collect(),
        })
    }

    /// Records the decision only; disbursement happens outside the platform.
    pub async fn review(
        state: &AppState,
        reviewer: &User,
        request_id: Uuid,
        decision: ReviewDecisionRequest,
    ) -> Result<BorrowDto, ApiError> {
        let mut conn = state.db.get()?;
        let comment = decision.comment.as_deref();

        let reviewed = conn.transaction::<_, ApiError, _>(|conn| {
            let request = BorrowRepository::find_for_update(conn, request_id)?
                .ok_or_else(|| ApiError::NotFound("Borrow request".into()))?;

            if request.status != ReviewStatus::Pending {
                return Err(BusinessError::AlreadyReviewed {
                    status: request.status.to_string(),
                }
                .into());
            }

            let status = match decision.action {
                ReviewAction::Approve => ReviewStatus::Approved,
                ReviewAction::Reject => ReviewStatus::Rejected,
            };

            BorrowRepository::mark_reviewed(conn, request_id, status, reviewer.id, comment)
        })?;

        info!(borrow_id = %request_id, status = %reviewed.status, "borrow request reviewed");

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "borrow_reviewed",
            Some("borrow_request"),
            Some(&request_id.to_string()),
            json!({ "status": reviewed.status.to_string(), "amount": reviewed.amount }),
            None,
        )
        .await?;

        Ok(BorrowDto::from(reviewed))
    }
}
