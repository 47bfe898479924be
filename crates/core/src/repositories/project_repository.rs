use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::UpdateProjectRequest;
use fundbridge_primitives::models::entities::enum_types::{ProjectStatus, ReviewStatus};
use fundbridge_primitives::models::entities::project::{NewProject, Project};
use fundbridge_primitives::schema::projects;
use uuid::Uuid;

pub struct ProjectRepository;

impl ProjectRepository {
    pub fn create(conn: &mut PgConnection, new_project: NewProject) -> Result<Project, ApiError> {
        diesel::insert_into(projects::table)
            .values(&new_project)
            .get_result::<Project>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(conn: &mut PgConnection, project_id: Uuid) -> Result<Option<Project>, ApiError> {
        projects::table
            .find(project_id)
            .first::<Project>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Listing for investors: admin-approved, active, not soft-deleted.
    pub fn list_open(conn: &mut PgConnection) -> Result<Vec<Project>, ApiError> {
        projects::table
            .filter(projects::approval_status.eq(ReviewStatus::Approved))
            .filter(projects::status.eq(ProjectStatus::Active))
            .order(projects::created_at.desc())
            .load::<Project>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_borrower(
        conn: &mut PgConnection,
        borrower_id: Uuid,
    ) -> Result<Vec<Project>, ApiError> {
        projects::table
            .filter(projects::borrower_id.eq(borrower_id))
            .filter(projects::status.ne(ProjectStatus::Deleted))
            .order(projects::created_at.desc())
            .load::<Project>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Project>, ApiError> {
        projects::table
            .order(projects::created_at.desc())
            .load::<Project>(conn)
            .map_err(ApiError::from)
    }

    pub fn update_terms(
        conn: &mut PgConnection,
        project_id: Uuid,
        current: &Project,
        changes: &UpdateProjectRequest,
    ) -> Result<Project, ApiError> {
        diesel::update(projects::table.find(project_id))
            .set((
                projects::title.eq(changes.title.as_deref().unwrap_or(&current.title)),
                projects::summary.eq(changes.summary.as_deref().unwrap_or(&current.summary)),
                projects::funding_goal.eq(changes.funding_goal.unwrap_or(current.funding_goal)),
                projects::tenor_months.eq(changes.tenor_months.unwrap_or(current.tenor_months)),
                projects::interest_rate_bps
                    .eq(changes.interest_rate_bps.unwrap_or(current.interest_rate_bps)),
                projects::updated_at.eq(Utc::now()),
            ))
            .get_result::<Project>(conn)
            .map_err(ApiError::from)
    }

    pub fn soft_delete(conn: &mut PgConnection, project_id: Uuid) -> Result<(), ApiError> {
        diesel::update(projects::table.find(project_id))
            .set((
                projects::status.eq(ProjectStatus::Deleted),
                projects::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn mark_reviewed(
        conn: &mut PgConnection,
        project_id: Uuid,
        approval_status: ReviewStatus,
        status: ProjectStatus,
        reviewer_id: Uuid,
        comment: Option<&str>,
    ) -> Result<Project, ApiError> {
        diesel::update(projects::table.find(project_id))
            .set((
                projects::approval_status.eq(approval_status),
                projects::status.eq(status),
                projects::reviewed_by.eq(reviewer_id),
                projects::reviewed_at.eq(Utc::now()),
                projects::review_comment.eq(comment),
                projects::updated_at.eq(Utc::now()),
            ))
            .get_result::<Project>(conn)
            .map_err(ApiError::from)
    }

    /// Atomic increment of the funding accumulator; returns the new total.
    pub fn add_funding(
        conn: &mut PgConnection,
        project_id: Uuid,
        amount: i64,
    ) -> Result<i64, ApiError> {
        diesel::update(projects::table.find(project_id))
            .set((
                projects::total_funded.eq(projects::total_funded + amount),
                projects::updated_at.eq(Utc::now()),
            ))
            .returning(projects::total_funded)
            .get_result::<i64>(conn)
            .map_err(ApiError::from)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        project_id: Uuid,
        status: ProjectStatus,
    ) -> Result<(), ApiError> {
        diesel::update(projects::table.find(project_id))
            .set((
                projects::status.eq(status),
                projects::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }
}
