use crate::app_state::AppState;
use crate::repositories::funding_repository::FundingRepository;
use crate::repositories::interest_repository::InterestRepository;
use crate::repositories::project_repository::ProjectRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use crate::services::audit_service::AuditService;
use fundbridge_primitives::error::{ApiError, BusinessError};
use fundbridge_primitives::models::dtos::{
    ContributionDto, CreateProjectRequest, ProjectDetailResponse, ProjectDto, ProjectsResponse,
    ReviewAction, ReviewDecisionRequest, UpdateProjectRequest,
};
use fundbridge_primitives::models::entities::enum_types::{ProjectStatus, ReviewStatus};
use fundbridge_primitives::models::entities::project::{NewProject, Project};
use fundbridge_primitives::models::entities::User;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct ProjectService;

impl ProjectService {
    pub async fn create(
        state: &AppState,
        claims: &Claims,
        req: CreateProjectRequest,
    ) -> Result<ProjectDto, ApiError> {
        let mut conn = state.db.get()?;

        let borrower = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        if borrower.suspended {
            return Err(BusinessError::AccountSuspended.into());
        }
        if !borrower.has_borrower_account {
            return Err(ApiError::Forbidden(
                "A borrower account is required to create projects".into(),
            ));
        }

        let project = ProjectRepository::create(
            &mut conn,
            NewProject {
                borrower_id: borrower.id,
                title: &req.title,
                summary: &req.summary,
                funding_goal: req.funding_goal,
                tenor_months: req.tenor_months,
                interest_rate_bps: req.interest_rate_bps,
                status: ProjectStatus::Draft,
                approval_status: ReviewStatus::Pending,
            },
        )?;

        info!(project_id = %project.id, "project created");

        Ok(ProjectDto::from(project))
    }

    pub async fn list(
        state: &AppState,
        claims: &Claims,
        mine: bool,
    ) -> Result<ProjectsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let projects = if mine {
            ProjectRepository::list_by_borrower(&mut conn, user.id)?
        } else {
            ProjectRepository::list_open(&mut conn)?
        };

        Ok(ProjectsResponse {
            projects: projects.into_iter().map(ProjectDto::from).collect(),
        })
    }

    pub async fn detail(
        state: &AppState,
        claims: &Claims,
        project_id: Uuid,
    ) -> Result<ProjectDetailResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let project = Self::find_visible(&mut conn, project_id, &user)?;
        let contributions = FundingRepository::list_by_project(&mut conn, project_id)?;

        Ok(ProjectDetailResponse {
            project: ProjectDto::from(project),
            contributions: contributions.into_iter().map(ContributionDto::from).collect(),
        })
    }

    pub async fn update(
        state: &AppState,
        claims: &Claims,
        project_id: Uuid,
        req: UpdateProjectRequest,
    ) -> Result<ProjectDto, ApiError> {
        let mut conn = state.db.get()?;

        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let project = Self::find_owned(&mut conn, project_id, &user)?;

        let updated = ProjectRepository::update_terms(&mut conn, project_id, &project, &req)?;

        Ok(ProjectDto::from(updated))
    }

    pub async fn delete(
        state: &AppState,
        claims: &Claims,
        project_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;

        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        Self::find_owned(&mut conn, project_id, &user)?;

        ProjectRepository::soft_delete(&mut conn, project_id)?;
        info!(project_id = %project_id, "project soft-deleted");

        Ok(())
    }

    pub async fn list_all(state: &AppState) -> Result<ProjectsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let projects = ProjectRepository::list_all(&mut conn)?;

        Ok(ProjectsResponse {
            projects: projects.into_iter().map(ProjectDto::from).collect(),
        })
    }

    /// Admin review: approval opens the project for funding, rejection
    /// leaves it in draft.
    pub async fn review(
        state: &AppState,
        reviewer: &User,
        project_id: Uuid,
        decision: ReviewDecisionRequest,
    ) -> Result<ProjectDto, ApiError> {
        let mut conn = state.db.get()?;

        let project = ProjectRepository::find_by_id(&mut conn, project_id)?
            .ok_or_else(|| ApiError::NotFound("Project".into()))?;

        if project.approval_status != ReviewStatus::Pending {
            return Err(BusinessError::AlreadyReviewed {
                status: project.approval_status.to_string(),
            }
            .into());
        }

        let (approval_status, status) = match decision.action {
            ReviewAction::Approve => (ReviewStatus::Approved, ProjectStatus::Active),
            ReviewAction::Reject => (ReviewStatus::Rejected, ProjectStatus::Draft),
        };

        let reviewed = ProjectRepository::mark_reviewed(
            &mut conn,
            project_id,
            approval_status,
            status,
            reviewer.id,
            decision.comment.as_deref(),
        )?;

        info!(project_id = %project_id, status = %reviewed.approval_status, "project reviewed");

        AuditService::log_event(
            state,
            Some(reviewer.id),
            "project_reviewed",
            Some("project"),
            Some(&project_id.to_string()),
            json!({ "approval_status": reviewed.approval_status.to_string() }),
            None,
        )
        .await?;

        Ok(ProjectDto::from(reviewed))
    }

    pub async fn add_interest(
        state: &AppState,
        claims: &Claims,
        project_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let project = Self::find_visible(&mut conn, project_id, &user)?;
        if !project.is_open_for_funding() {
            return Err(BusinessError::ProjectNotOpen.into());
        }

        InterestRepository::add(&mut conn, project_id, user.id)
    }

    pub async fn remove_interest(
        state: &AppState,
        claims: &Claims,
        project_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        InterestRepository::remove(&mut conn, project_id, user.id)
    }

    /// Soft-deleted projects are invisible to everyone but their owner.
    fn find_visible(
        conn: &mut diesel::PgConnection,
        project_id: Uuid,
        user: &User,
    ) -> Result<Project, ApiError> {
        let project = ProjectRepository::find_by_id(conn, project_id)?
            .ok_or_else(|| ApiError::NotFound("Project".into()))?;

        if project.status == ProjectStatus::Deleted && project.borrower_id != user.id {
            return Err(ApiError::NotFound("Project".into()));
        }

        Ok(project)
    }

    fn find_owned(
        conn: &mut diesel::PgConnection,
        project_id: Uuid,
        user: &User,
    ) -> Result<Project, ApiError> {
        let project = ProjectRepository::find_by_id(conn, project_id)?
            .ok_or_else(|| ApiError::NotFound("Project".into()))?;

        if project.borrower_id != user.id {
            return Err(ApiError::Forbidden("Not the project owner".into()));
        }
        if project.status == ProjectStatus::Deleted {
            return Err(ApiError::NotFound("Project".into()));
        }

        Ok(project)
    }
}
