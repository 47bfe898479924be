mod common;

use common::fixtures::{make_admin, provision_user};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn borrow_review_records_the_decision_only() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, _) = provision_user(&server, "borrower").await;

    let response = server
        .post("/api/borrow")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "amount": 75_000,
            "purpose": "Bridge financing while invoices clear."
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let request_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["status"], "pending");

    let response = server
        .post(&format!("/api/admin/borrow/{}/review", request_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": "within policy" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "approved");

    // approval never touches the wallet
    let response = server
        .get("/api/wallet")
        .add_header("Authorization", bearer(&subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["balance"], 0);

    // terminal requests refuse re-review
    let response = server
        .post(&format!("/api/admin/borrow/{}/review", request_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "reject", "comment": null }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn investors_without_borrower_role_cannot_request() {
    let (server, _state) = create_test_server();

    let (subject, _) = provision_user(&server, "investor").await;

    let response = server
        .post("/api/borrow")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "amount": 10_000,
            "purpose": "Testing the gate from the wrong role."
        }))
        .await;
    response.assert_status(axum::http::StatusCode::FORBIDDEN);
}
