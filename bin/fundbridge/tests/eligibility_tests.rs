use fundbridge_core::eligibility::{
    compute_limit, effective_income, effective_verification, DEFAULT_ANNUAL_INCOME,
    LOWER_TIER_PERCENTAGE, UPPER_TIER_PERCENTAGE,
};
use fundbridge_primitives::models::entities::enum_types::VerificationStatus;

#[test]
fn lower_tier_below_boundary() {
    let limit = compute_limit(1_999_999);
    assert_eq!(limit.max_percentage, LOWER_TIER_PERCENTAGE);
    assert_eq!(limit.max_amount, 1_999_999 * 5 / 100);
}

#[test]
fn upper_tier_boundary_is_inclusive() {
    let limit = compute_limit(2_000_000);
    assert_eq!(limit.max_percentage, UPPER_TIER_PERCENTAGE);
    assert_eq!(limit.max_amount, 200_000);
}

#[test]
fn default_income_limit() {
    let limit = compute_limit(DEFAULT_ANNUAL_INCOME);
    assert_eq!(limit.max_percentage, 5);
    assert_eq!(limit.max_amount, 50_000);
}

#[test]
fn high_income_limit() {
    let limit = compute_limit(10_000_000);
    assert_eq!(limit.max_percentage, 10);
    assert_eq!(limit.max_amount, 1_000_000);
}

#[test]
fn zero_income_yields_zero_limit() {
    let limit = compute_limit(0);
    assert_eq!(limit.max_percentage, 5);
    assert_eq!(limit.max_amount, 0);
}

#[test]
fn missing_profile_falls_back_to_defaults() {
    assert_eq!(effective_income(None), DEFAULT_ANNUAL_INCOME);
    assert_eq!(effective_verification(None), VerificationStatus::Verified);
}

#[test]
fn snapshot_carries_the_income_used() {
    let limit = compute_limit(effective_income(None));
    assert_eq!(limit.annual_income, DEFAULT_ANNUAL_INCOME);
}
