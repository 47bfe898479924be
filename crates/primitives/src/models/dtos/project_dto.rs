use crate::models::entities::enum_types::{ProjectStatus, ReviewStatus};
use crate::models::entities::{FundingContribution, Project};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 3, max = 120))]
    pub title: String,
    #[validate(length(min = 10, max = 2000))]
    pub summary: String,
    #[validate(range(min = 1, max = 10_000_000_000))]
    pub funding_goal: i64,
    #[validate(range(min = 1, max = 120))]
    pub tenor_months: i32,
    #[validate(range(min = 0, max = 10_000))]
    pub interest_rate_bps: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 3, max = 120))]
    pub title: Option<String>,
    #[validate(length(min = 10, max = 2000))]
    pub summary: Option<String>,
    #[validate(range(min = 1, max = 10_000_000_000))]
    pub funding_goal: Option<i64>,
    #[validate(range(min = 1, max = 120))]
    pub tenor_months: Option<i32>,
    #[validate(range(min = 0, max = 10_000))]
    pub interest_rate_bps: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDto {
    pub id: Uuid,
    pub borrower_id: Uuid,
    pub title: String,
    pub summary: String,
    pub funding_goal: i64,
    pub tenor_months: i32,
    pub interest_rate_bps: i32,
    pub status: ProjectStatus,
    pub approval_status: ReviewStatus,
    pub total_funded: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            borrower_id: project.borrower_id,
            title: project.title,
            summary: project.summary,
            funding_goal: project.funding_goal,
            tenor_months: project.tenor_months,
            interest_rate_bps: project.interest_rate_bps,
            status: project.status,
            approval_status: project.approval_status,
            total_funded: project.total_funded,
            created_at: project.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContributionDto {
    pub investor_id: Uuid,
    pub amount: i64,
}

impl From<FundingContribution> for ContributionDto {
    fn from(contribution: FundingContribution) -> Self {
        Self {
            investor_id: contribution.investor_id,
            amount: contribution.amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectDto,
    pub contributions: Vec<ContributionDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectDto>,
}
