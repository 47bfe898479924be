mod common;

use common::fixtures::{make_admin, provision_user};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn missing_or_malformed_credentials_are_unauthorized() {
    let (server, _state) = create_test_server();

    let response = server.get("/api/wallet").await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/wallet")
        .add_header("Authorization", "Bearer not-a-real-token")
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/wallet")
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn admin_routes_refuse_plain_users() {
    let (server, _state) = create_test_server();

    let (subject, _) = provision_user(&server, "investor").await;

    for route in [
        "/api/admin/users",
        "/api/admin/projects",
        "/api/admin/investments",
        "/api/admin/topups",
        "/api/admin/borrow",
        "/api/admin/tickets",
        "/api/admin/audit",
    ] {
        let response = server
            .get(route)
            .add_header("Authorization", bearer(&subject))
            .await;
        response.assert_status(axum::http::StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
#[serial]
async fn capability_grant_opens_exactly_that_surface() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (member_subject, member_id) = provision_user(&server, "investor").await;

    let response = server
        .put(&format!("/api/admin/team/{}", member_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "capabilities": ["review_top_ups"] }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["capabilities"], json!(["review_top_ups"]));

    // granted surface works
    let response = server
        .get("/api/admin/topups")
        .add_header("Authorization", bearer(&member_subject))
        .await;
    response.assert_status_ok();

    // everything else stays closed
    let response = server
        .get("/api/admin/investments")
        .add_header("Authorization", bearer(&member_subject))
        .await;
    response.assert_status(axum::http::StatusCode::FORBIDDEN);

    // revoking closes it again
    let response = server
        .put(&format!("/api/admin/team/{}", member_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "capabilities": [] }))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/admin/topups")
        .add_header("Authorization", bearer(&member_subject))
        .await;
    response.assert_status(axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn admin_flag_grants_every_capability() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    for route in [
        "/api/admin/users",
        "/api/admin/projects",
        "/api/admin/investments",
        "/api/admin/topups",
        "/api/admin/borrow",
        "/api/admin/tickets",
        "/api/admin/audit",
    ] {
        let response = server
            .get(route)
            .add_header("Authorization", bearer(&admin_subject))
            .await;
        response.assert_status_ok();
    }
}

#[tokio::test]
#[serial]
async fn suspended_users_cannot_submit() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (subject, user_id) = provision_user(&server, "investor").await;

    let response = server
        .put(&format!("/api/admin/users/{}/flags", user_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "suspended": true }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/topup")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({ "amount": 1_000, "bank_reference": "TRX-SUSPENDED" }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("suspended"));
}
