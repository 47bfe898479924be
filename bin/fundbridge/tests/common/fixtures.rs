use axum_test::TestServer;
use diesel::prelude::*;
use fake::faker::name::en::Name;
use fake::Fake;
use fundbridge_core::AppState;
use fundbridge_primitives::schema::{users, wallets};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use super::bearer;

/// Provision a user through the profile upsert, the way a fresh login would.
/// Returns (subject_id, user_id).
pub async fn provision_user(server: &TestServer, account_type: &str) -> (String, Uuid) {
    let subject = format!("idp|{}", Uuid::new_v4());
    let display_name: String = Name().fake();

    let response = server
        .post("/api/profile")
        .add_header("Authorization", bearer(&subject))
        .json(&json!({
            "display_name": display_name,
            "email": format!("{}@example.com", Uuid::new_v4()),
            "account_type": account_type
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let user_id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    (subject, user_id)
}

/// Flip the admin flag directly; there is no API to bootstrap the first admin.
pub fn make_admin(state: &Arc<AppState>, user_id: Uuid) {
    let mut conn = state.db.get().expect("db");
    diesel::update(users::table.find(user_id))
        .set(users::is_admin.eq(true))
        .execute(&mut conn)
        .expect("set admin flag");
}

/// Fund a wallet through the claimed-transfer flow: submit a top-up as the
/// user, approve it as the given admin.
pub async fn fund_wallet(
    server: &TestServer,
    subject: &str,
    admin_subject: &str,
    amount: i64,
) {
    let response = server
        .post("/api/topup")
        .add_header("Authorization", bearer(subject))
        .json(&json!({
            "amount": amount,
            "bank_reference": format!("TRX-{}", Uuid::new_v4())
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let topup_id = body["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/admin/topups/{}/review", topup_id))
        .add_header("Authorization", bearer(admin_subject))
        .json(&json!({ "action": "approve", "comment": null }))
        .await;
    response.assert_status_ok();
}

pub fn wallet_balance_of(state: &Arc<AppState>, user_id: Uuid) -> i64 {
    let mut conn = state.db.get().expect("db");
    wallets::table
        .filter(wallets::user_id.eq(user_id))
        .select(wallets::balance)
        .first::<i64>(&mut conn)
        .optional()
        .expect("balance query")
        .unwrap_or(0)
}

/// Declare investor income and get an admin in place; returns the admin
/// subject used for reviews.
pub async fn declare_income(server: &TestServer, subject: &str, annual_income: i64) {
    let response = server
        .put("/api/profile/investor")
        .add_header("Authorization", bearer(subject))
        .json(&json!({ "annual_income": annual_income }))
        .await;
    response.assert_status_ok();
}

/// Create a project as the borrower and approve it as the admin so it is
/// open for funding. Returns the project id.
pub async fn open_project(
    server: &TestServer,
    borrower_subject: &str,
    admin_subject: &str,
    funding_goal: i64,
) -> Uuid {
    let response = server
        .post("/api/projects")
        .add_header("Authorization", bearer(borrower_subject))
        .json(&json!({
            "title": "Working capital expansion",
            "summary": "Inventory financing for the coming quarter across two warehouses.",
            "funding_goal": funding_goal,
            "tenor_months": 12,
            "interest_rate_bps": 1200
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let project_id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    let response = server
        .post(&format!("/api/admin/projects/{}/review", project_id))
        .add_header("Authorization", bearer(admin_subject))
        .json(&json!({ "action": "approve", "comment": "Looks viable" }))
        .await;
    response.assert_status_ok();

    project_id
}
