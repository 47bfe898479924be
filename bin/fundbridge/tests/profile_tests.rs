mod common;

use common::fixtures::{make_admin, provision_user};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn upsert_provisions_then_updates() {
    let (server, _state) = create_test_server();

    let subject = format!("idp|{}", Uuid::new_v4());

    // unknown subjects have no profile yet
    let response = server
        .get("/api/profile")
        .add_header("Authorization", bearer(&subject))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let response = server
        .post("/api/profile")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "display_name": "Nadia Rahma",
            "email": "nadia@example.com",
            "account_type": "investor"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["has_investor_account"], true);
    assert_eq!(body["has_borrower_account"], false);
    assert_eq!(body["current_account_type"], "investor");

    // second upsert edits in place, it does not create a new row
    let response = server
        .post("/api/profile")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "display_name": "Nadia R.",
            "email": "nadia@example.com",
            "account_type": "investor"
        }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["id"], body["id"]);
    assert_eq!(updated["display_name"], "Nadia R.");
}

#[tokio::test]
#[serial]
async fn switching_account_type_keeps_old_role_open() {
    let (server, _state) = create_test_server();

    let (subject, _) = provision_user(&server, "investor").await;

    let response = server
        .put("/api/profile/account_type")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "account_type": "borrower" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["current_account_type"], "borrower");
    assert_eq!(body["has_borrower_account"], true);
    assert_eq!(body["has_investor_account"], true);
}

#[tokio::test]
#[serial]
async fn income_declaration_reenters_review() {
    let (server, _state) = create_test_server();

    let (subject, _) = provision_user(&server, "investor").await;

    // nothing declared yet
    let response = server
        .get("/api/profile/investor")
        .add_header("Authorization", bearer(&subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.is_null());

    let response = server
        .put("/api/profile/investor")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "annual_income": 2_500_000 }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["annual_income"], 2_500_000);
    assert_eq!(body["verification"], "pending_review");
}

#[tokio::test]
#[serial]
async fn kyc_decision_lands_on_the_profile() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, user_id) = provision_user(&server, "investor").await;

    let response = server
        .put("/api/profile/investor")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "annual_income": 3_000_000 }))
        .await;
    response.assert_status_ok();

    let response = server
        .put(&format!("/api/admin/investors/{}/verification", user_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "verification": "verified" }))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/profile/investor")
        .add_header("Authorization", bearer(&subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["verification"], "verified");
}

#[tokio::test]
#[serial]
async fn settings_default_until_saved() {
    let (server, _state) = create_test_server();

    let (subject, _) = provision_user(&server, "investor").await;

    let response = server
        .get("/api/settings")
        .add_header("Authorization", bearer(&subject))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["notifications_enabled"], true);
    assert_eq!(body["language"], "en");

    let response = server
        .put("/api/settings")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "notifications_enabled": false, "language": "id" }))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/settings")
        .add_header("Authorization", bearer(&subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["notifications_enabled"], false);
    assert_eq!(body["language"], "id");
}
