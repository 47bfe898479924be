mod common;

use common::fixtures::{make_admin, open_project, provision_user};
use common::{bearer, create_test_server};
use serde_json::{json, Value};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn unreviewed_projects_stay_off_the_market() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (investor_subject, _) = provision_user(&server, "investor").await;

    let response = server
        .post("/api/projects")
        .add_header("Authorization", bearer(&borrower_subject))
        .json(&json!({
            "title": "Cold storage build-out",
            "summary": "Extending the cold chain to two more districts.",
            "funding_goal": 250_000,
            "tenor_months": 18,
            "interest_rate_bps": 1500
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["approval_status"], "pending");
    assert_eq!(body["status"], "draft");
    let pending_id = body["id"].as_str().unwrap().to_string();

    // not listed for investors while pending
    let response = server
        .get("/api/projects")
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["projects"].as_array().unwrap().len(), 0);

    // but the borrower sees it under ?mine=true
    let response = server
        .get("/api/projects?mine=true")
        .add_header("Authorization", bearer(&borrower_subject))
        .await;
    let body: Value = response.json();
    assert_eq!(body["projects"].as_array().unwrap().len(), 1);

    // approval puts it on the market
    let response = server
        .post(&format!("/api/admin/projects/{}/review", pending_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "approve", "comment": null }))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/projects")
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    let body: Value = response.json();
    let projects = body["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["status"], "active");
}

#[tokio::test]
#[serial]
async fn project_review_is_single_shot() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let project_id = open_project(&server, &borrower_subject, &admin_subject, 100_000).await;

    let response = server
        .post(&format!("/api/admin/projects/{}/review", project_id))
        .add_header("Authorization", bearer(&admin_subject))
        .json(&json!({ "action": "reject", "comment": "changed my mind" }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn only_the_owner_edits_or_deletes() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (stranger_subject, _) = provision_user(&server, "borrower").await;

    let project_id = open_project(&server, &borrower_subject, &admin_subject, 100_000).await;

    let response = server
        .put(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&stranger_subject))
        .json(&json!({ "title": "Hijacked title" }))
        .await;
    response.assert_status(axum::http::StatusCode::FORBIDDEN);

    let response = server
        .put(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&borrower_subject))
        .json(&json!({ "title": "Adjusted working capital" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Adjusted working capital");

    // soft delete hides it from everyone but the owner
    let response = server
        .delete(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&borrower_subject))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&stranger_subject))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let response = server
        .get(&format!("/api/projects/{}", project_id))
        .add_header("Authorization", bearer(&borrower_subject))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
#[serial]
async fn interest_requires_an_open_project() {
    let (server, state) = create_test_server();

    let (admin_subject, admin_id) = provision_user(&server, "investor").await;
    make_admin(&state, admin_id);

    let (borrower_subject, _) = provision_user(&server, "borrower").await;
    let (investor_subject, _) = provision_user(&server, "investor").await;

    let project_id = open_project(&server, &borrower_subject, &admin_subject, 100_000).await;

    let response = server
        .post(&format!("/api/projects/{}/interest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // marking twice stays idempotent
    let response = server
        .post(&format!("/api/projects/{}/interest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server
        .delete(&format!("/api/projects/{}/interest", project_id))
        .add_header("Authorization", bearer(&investor_subject))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}
