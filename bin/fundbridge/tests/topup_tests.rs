mod common;

use common::fixtures::{fund_wallet, make_admin, provision_user, wallet_balance_of};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn first_credit_creates_the_wallet() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, user_id) = provision_user(&server, "investor").await;
    assert_eq!(wallet_balance_of(&state, user_id), 0);

    fund_wallet(&server, &subject, &admin_subject, 25_000).await;
    assert_eq!(wallet_balance_of(&state, user_id), 25_000);

    // a second approval adds instead of replacing
    fund_wallet(&server, &subject, &admin_subject, 10_000).await;
    assert_eq!(wallet_balance_of(&state, user_id), 35_000);
}

#[tokio::test]
#[serial]
async fn rejected_claim_never_credits() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, user_id) = provision_user(&server, "investor").await;

    let response = server
        .post("/api/topup")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "amount": 40_000, "bank_reference": "TRX-REJECT-01" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let topup_id = body["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/admin/topups/{}/review", topup_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "reject", "comment": "no matching transfer" }))
        .await;
    response.assert_status_ok();

    assert_eq!(wallet_balance_of(&state, user_id), 0);

    // terminal claims refuse a second review
    let response = server
        .post(&format!("/api/admin/topups/{}/review", topup_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": null }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(wallet_balance_of(&state, user_id), 0);
}

#[tokio::test]
#[serial]
async fn history_lists_own_claims_newest_first() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, _) = provision_user(&server, "investor").await;

    for reference in ["TRX-HIST-01", "TRX-HIST-02"] {
        let response = server
            .post("/api/topup")
            .add_header("Authorization", bearer(&subject))
            .json(&json!({ "amount": 5_000, "bank_reference": reference }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .get("/api/topup/history")
        .add_header("Authorization", bearer(&subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let topups = body["topups"].as_array().unwrap();
    assert_eq!(topups.len(), 2);
    assert_eq!(topups[0]["bank_reference"], "TRX-HIST-02");

    // another user sees none of them
    let (other_subject, _) = provision_user(&server, "investor").await;
    let response = server
        .get("/api/topup/history")
        .add_header("Authorization", bearer(&other_subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["topups"].as_array().unwrap().len(), 0);
}
