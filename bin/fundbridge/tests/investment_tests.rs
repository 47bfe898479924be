mod common;

use common::fixtures::{
    declare_income, fund_wallet, make_admin, open_project, provision_user, wallet_balance_of,
};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn investment_lifecycle_limits_and_approval() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (investor_subject, investor_id) = provision_user(&server, "investor").await;

    fund_wallet(&server, &investor_subject, &admin_subject, 100_000).await;
    declare_income(&server, &investor_subject, 1_000_000).await;

    let project_id = open_project(&server, &borrower_subject, &admin_subject, 500_000).await;

    // over the 5% limit: rejected with the limit snapshot in the details
    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .json(&json!({ "amount": 60_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["max_amount"], 50_000);
    assert_eq!(body["details"]["max_percentage"], 5);
    assert_eq!(body["details"]["requested"], 60_000);

    // exactly at the limit: accepted as pending
    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .json(&json!({ "amount": 50_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "pending");
    let request_id = body["id"].as_str().unwrap().to_string();

    // submission does not touch the wallet
    assert_eq!(wallet_balance_of(&state, investor_id), 100_000);

    // approval debits the wallet and credits the funding ledger
    let response = server
        .post(&format!("/api/admin/investments/{}/review", request_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": "confirmed" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "approved");

    assert_eq!(wallet_balance_of(&state, investor_id), 50_000);

    let response = server
        .get(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_funded"], 50_000);
    assert_eq!(body["contributions"][0]["amount"], 50_000);

    // one request per project per investor, ever
    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .json(&json!({ "amount": 1_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn borrower_cannot_invest_in_own_project() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    fund_wallet(&server, &borrower_subject, &admin_subject, 100_000).await;

    let project_id = open_project(&server, &borrower_subject, &admin_subject, 500_000).await;

    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&borrower_subject))
        .json(&json!({ "amount": 10_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("own project"));
}

#[tokio::test]
#[serial]
async fn insufficient_balance_rejected_without_mutation() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (investor_subject, investor_id) = provision_user(&server, "investor").await;

    fund_wallet(&server, &investor_subject, &admin_subject, 10_000).await;
    declare_income(&server, &investor_subject, 1_000_000).await;

    let project_id = open_project(&server, &borrower_subject, &admin_subject, 500_000).await;

    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .json(&json!({ "amount": 20_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["balance"], 10_000);
    assert_eq!(body["details"]["required"], 20_000);
    assert_eq!(body["details"]["shortfall"], 10_000);

    assert_eq!(wallet_balance_of(&state, investor_id), 10_000);

    let response = server
        .get("/api/investments")
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["requests"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn rejection_and_re_review_leave_state_unchanged() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (investor_subject, investor_id) = provision_user(&server, "investor").await;

    fund_wallet(&server, &investor_subject, &admin_subject, 100_000).await;
    declare_income(&server, &investor_subject, 1_000_000).await;

    let project_id = open_project(&server, &borrower_subject, &admin_subject, 500_000).await;

    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .json(&json!({ "amount": 30_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let request_id = body["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/admin/investments/{}/review", request_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "reject", "comment": "not this round" }))
        .await;
    response.assert_status_ok();

    // rejecting mutates neither wallet nor ledger
    assert_eq!(wallet_balance_of(&state, investor_id), 100_000);
    let response = server
        .get(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["total_funded"], 0);

    // a terminal request cannot be reviewed again
    let response = server
        .post(&format!("/api/admin/investments/{}/review", request_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": null }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(wallet_balance_of(&state, investor_id), 100_000);
}

#[tokio::test]
#[serial]
async fn approval_rechecks_balance_at_review_time() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_a, _) = provision_user(&server, "borrower").await;
    let (borrower_b, _) = provision_user(&server, "borrower").await;
    let (investor_subject, investor_id) = provision_user(&server, "investor").await;

    fund_wallet(&server, &investor_subject, &admin_subject, 50_000).await;
    declare_income(&server, &investor_subject, 2_000_000).await;

    let project_a = open_project(&server, &borrower_a, &admin_subject, 500_000).await;
    let project_b = open_project(&server, &borrower_b, &admin_subject, 500_000).await;

    // pending requests do not reserve funds, so both submissions pass
    for project_id in [project_a, project_b] {
        let response = server
            .post(&format!("/api/projects/{}/invest", project_id))
            .add_header("Authorization", bearer(&investor_subject))
            .json(&json!({ "amount": 50_000 }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .get("/api/admin/investments")
        .add_header("Authorization", bearer(&admin_subject))
        .await;
    let body: Value = response.json();
    let requests = body["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 2);
    let first = requests[0]["id"].as_str().unwrap().to_string();
    let second = requests[1]["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/admin/investments/{}/review", first))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": null }))
        .await;
    response.assert_status_ok();
    assert_eq!(wallet_balance_of(&state, investor_id), 0);

    // the wallet drained between submission and review; the second approval
    // must abort with the shortfall and leave the request pending
    let response = server
        .post(&format!("/api/admin/investments/{}/review", second))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": null }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["shortfall"], 50_000);

    let response = server
        .get("/api/admin/investments")
        .add_header("Authorization", bearer(&admin_subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["requests"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn investing_in_unapproved_project_is_refused() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (investor_subject, _) = provision_user(&server, "investor").await;
    fund_wallet(&server, &investor_subject, &admin_subject, 100_000).await;

    // created but never reviewed
    let response = server
        .post("/api/projects")
        .add_header("Authorization", bearer(&borrower_subject))
        .json(&json!({
            "title": "Unreviewed venture",
            "summary": "Still waiting for the back office to look at this.",
            "funding_goal": 100_000,
            "tenor_months": 6,
            "interest_rate_bps": 900
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let project_id = body["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/projects/{}/invest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .json(&json!({ "amount": 10_000 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not open"));
}
