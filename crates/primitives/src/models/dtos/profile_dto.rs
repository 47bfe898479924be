use crate::models::entities::enum_types::{AccountType, VerificationStatus};
use crate::models::entities::{BorrowerProfile, InvestorProfile, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub has_borrower_account: bool,
    pub has_investor_account: bool,
    pub current_account_type: AccountType,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
            has_borrower_account: user.has_borrower_account,
            has_investor_account: user.has_investor_account,
            current_account_type: user.current_account_type,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, validator::Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 2, max = 64))]
    pub display_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountTypeRequest {
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestorProfileDto {
    pub annual_income: Option<i64>,
    pub verification: VerificationStatus,
}

impl From<InvestorProfile> for InvestorProfileDto {
    fn from(profile: InvestorProfile) -> Self {
        Self {
            annual_income: profile.annual_income,
            verification: profile.verification,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, validator::Validate)]
pub struct UpdateInvestorProfileRequest {
    #[validate(range(min = 0))]
    pub annual_income: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateVerificationRequest {
    pub verification: VerificationStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowerProfileDto {
    pub company_name: Option<String>,
    pub occupation: Option<String>,
    pub bio: Option<String>,
}

impl From<BorrowerProfile> for BorrowerProfileDto {
    fn from(profile: BorrowerProfile) -> Self {
        Self {
            company_name: profile.company_name,
            occupation: profile.occupation,
            bio: profile.bio,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, validator::Validate)]
pub struct UpdateBorrowerProfileRequest {
    #[validate(length(max = 120))]
    pub company_name: Option<String>,
    #[validate(length(max = 120))]
    pub occupation: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
}
