mod common;

use common::fixtures::{make_admin, provision_user};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn ticket_thread_lifecycle() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, _) = provision_user(&server, "investor").await;

    let response = server
        .post("/api/support/tickets")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "subject": "Top-up not credited",
            "message": "I transferred yesterday and the wallet still shows zero."
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "open");
    let ticket_id = body["id"].as_str().unwrap().to_string();

    // admin reply flips the ticket to answered
    let response = server
        .post(&format!("/api/admin/tickets/{}/reply", ticket_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "body": "We are matching your transfer reference now." }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .get(&format!("/api/support/tickets/{}", ticket_id))
        .add_header("Authorization", bearer(&subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "answered");
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);

    // a user follow-up re-opens it
    let response = server
        .post(&format!("/api/support/tickets/{}/messages", ticket_id))
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "body": "Still nothing on my side." }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .get(&format!("/api/support/tickets/{}", ticket_id))
        .add_header("Authorization", bearer(&subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["status"], "open");

    // closing stops the thread
    let response = server
        .post(&format!("/api/admin/tickets/{}/close", ticket_id))
        .add_header("Authorization", bearer(&admin_subject))
        .await;
    response.assert_status_ok();

    let response = server
        .post(&format!("/api/support/tickets/{}/messages", ticket_id))
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "body": "One more thing..." }))
        .await;
    response.assert_status(axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn tickets_are_private_to_their_owner() {
    let (server, _state) = create_test_server();

    let (subject, _) = provision_user(&server, "investor").await;
    let (other_subject, _) = provision_user(&server, "investor").await;

    let response = server
        .post("/api/support/tickets")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "subject": "KYC question",
            "message": "Which documents count for income verification?"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let ticket_id = body["id"].as_str().unwrap();

    let response = server
        .get(&format!("/api/support/tickets/{}", ticket_id))
        .add_header("Authorization", bearer(&other_subject))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
