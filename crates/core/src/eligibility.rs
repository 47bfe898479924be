use fundbridge_primitives::models::entities::enum_types::VerificationStatus;
use fundbridge_primitives::models::entities::InvestorProfile;

/// Default policy for subjects with no investor profile or no declared
/// income. The permissive verification fallback matches the platform's
/// observed behavior and is intentional.
pub const DEFAULT_ANNUAL_INCOME: i64 = 1_000_000;
pub const DEFAULT_VERIFICATION: VerificationStatus = VerificationStatus::Verified;

/// Declared annual income at or above this tier earns the higher commitment
/// percentage. The boundary is inclusive.
pub const UPPER_TIER_INCOME: i64 = 2_000_000;
pub const UPPER_TIER_PERCENTAGE: i16 = 10;
pub const LOWER_TIER_PERCENTAGE: i16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityLimit {
    pub annual_income: i64,
    pub max_percentage: i16,
    pub max_amount: i64,
}

/// Maximum permissible investment derived from declared annual income.
pub fn compute_limit(annual_income: i64) -> EligibilityLimit {
    let max_percentage = if annual_income >= UPPER_TIER_INCOME {
        UPPER_TIER_PERCENTAGE
    } else {
        LOWER_TIER_PERCENTAGE
    };

    EligibilityLimit {
        annual_income,
        max_percentage,
        max_amount: annual_income * i64::from(max_percentage) / 100,
    }
}

pub fn effective_income(profile: Option<&InvestorProfile>) -> i64 {
    profile
        .and_then(|p| p.annual_income)
        .unwrap_or(DEFAULT_ANNUAL_INCOME)
}

pub fn effective_verification(profile: Option<&InvestorProfile>) -> VerificationStatus {
    profile.map(|p| p.verification).unwrap_or(DEFAULT_VERIFICATION)
}
