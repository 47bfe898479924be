use fundbridge_primitives::models::{
    CreateProjectRequest, InvestSubmitRequest, TopUpSubmitRequest, UpsertProfileRequest,
};
use serde_json::json;
use validator::Validate;

#[test]
fn top_up_request_validation() {
    let req = serde_json::from_value::<TopUpSubmitRequest>(json!({
        "amount": 25_000,
        "bank_reference": "TRX-2026-07-0001"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // zero amount
    let req = serde_json::from_value::<TopUpSubmitRequest>(json!({
        "amount": 0,
        "bank_reference": "TRX-2026-07-0002"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // reference too short
    let req = serde_json::from_value::<TopUpSubmitRequest>(json!({
        "amount": 1_000,
        "bank_reference": "abc"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn invest_request_validation() {
    let req = serde_json::from_value::<InvestSubmitRequest>(json!({ "amount": 50_000 })).unwrap();
    assert!(req.validate().is_ok());

    let req = serde_json::from_value::<InvestSubmitRequest>(json!({ "amount": 0 })).unwrap();
    assert!(req.validate().is_err());

    let req = serde_json::from_value::<InvestSubmitRequest>(json!({ "amount": -5 })).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn project_request_validation() {
    let req = serde_json::from_value::<CreateProjectRequest>(json!({
        "title": "Working capital",
        "summary": "Inventory financing for the next quarter.",
        "funding_goal": 500_000,
        "tenor_months": 12,
        "interest_rate_bps": 1200
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    // title too short
    let req = serde_json::from_value::<CreateProjectRequest>(json!({
        "title": "ab",
        "summary": "Inventory financing for the next quarter.",
        "funding_goal": 500_000,
        "tenor_months": 12,
        "interest_rate_bps": 1200
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // zero goal
    let req = serde_json::from_value::<CreateProjectRequest>(json!({
        "title": "Working capital",
        "summary": "Inventory financing for the next quarter.",
        "funding_goal": 0,
        "tenor_months": 12,
        "interest_rate_bps": 1200
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn profile_request_validation() {
    let req = serde_json::from_value::<UpsertProfileRequest>(json!({
        "display_name": "Ada Setiawan",
        "email": "ada@example.com",
        "account_type": "investor"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    let req = serde_json::from_value::<UpsertProfileRequest>(json!({
        "display_name": "A",
        "email": "not-an-email",
        "account_type": "borrower"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}
