use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    account_type::switch_account_type,
    admin_borrows::pending_borrows,
    admin_projects::list_all_projects,
    admin_tickets::{admin_reply_ticket, close_ticket, list_all_tickets},
    admin_top_ups::pending_top_ups,
    admin_users::{list_users, set_user_flags},
    admin_verify_investor::verify_investor,
    audit_logs::list_audit_logs,
    borrow::submit_borrow_request,
    borrow_history::borrow_history,
    borrower_profile::{get_borrower_profile, update_borrower_profile},
    create_project::create_project,
    create_ticket::create_ticket,
    current_user::current_user_details,
    delete_project::delete_project,
    get_project::get_project,
    health::health_check,
    invest::submit_investment,
    investor_profile::{get_investor_profile, update_investor_profile},
    list_projects::list_projects,
    my_investments::my_investments,
    pending_investments::pending_investments,
    project_interest::{add_project_interest, remove_project_interest},
    review_borrow::review_borrow,
    review_investment::review_investment,
    review_project::review_project,
    review_top_up::review_top_up,
    team_permissions::{get_team_permissions, update_team_permissions},
    ticket_message::add_ticket_message,
    top_up::submit_top_up,
    top_up_history::top_up_history,
    update_project::update_project,
    upsert_profile::upsert_profile,
    user_settings::{get_settings, update_settings},
    user_tickets::{ticket_detail, user_tickets},
    wallet_balance::wallet_balance,
};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use fundbridge_core::{AppState, SecurityConfig};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    let public_router = create_public_routers(metric_handle);
    let protected_router = create_secured_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // rate limiting confuses the in-process test client, so it stays off there
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(current_user_details))
        .route("/api/profile", post(upsert_profile))
        .route("/api/profile/account_type", put(switch_account_type))
        .route("/api/profile/investor", get(get_investor_profile))
        .route("/api/profile/investor", put(update_investor_profile))
        .route("/api/profile/borrower", get(get_borrower_profile))
        .route("/api/profile/borrower", put(update_borrower_profile))
        .route("/api/settings", get(get_settings))
        .route("/api/settings", put(update_settings))
        .route("/api/wallet", get(wallet_balance))
        .route("/api/topup", post(submit_top_up))
        .route("/api/topup/history", get(top_up_history))
        .route("/api/borrow", post(submit_borrow_request))
        .route("/api/borrow/history", get(borrow_history))
        .route("/api/projects", post(create_project))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{project_id}", get(get_project))
        .route("/api/projects/{project_id}", put(update_project))
        .route("/api/projects/{project_id}", delete(delete_project))
        .route("/api/projects/{project_id}/invest", post(submit_investment))
        .route(
            "/api/projects/{project_id}/interest",
            post(add_project_interest),
        )
        .route(
            "/api/projects/{project_id}/interest",
            delete(remove_project_interest),
        )
        .route("/api/investments", get(my_investments))
        .route("/api/support/tickets", post(create_ticket))
        .route("/api/support/tickets", get(user_tickets))
        .route("/api/support/tickets/{ticket_id}", get(ticket_detail))
        .route(
            "/api/support/tickets/{ticket_id}/messages",
            post(add_ticket_message),
        )
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/{user_id}/flags", put(set_user_flags))
        .route(
            "/api/admin/investors/{user_id}/verification",
            put(verify_investor),
        )
        .route("/api/admin/projects", get(list_all_projects))
        .route(
            "/api/admin/projects/{project_id}/review",
            post(review_project),
        )
        .route("/api/admin/investments", get(pending_investments))
        .route(
            "/api/admin/investments/{request_id}/review",
            post(review_investment),
        )
        .route("/api/admin/topups", get(pending_top_ups))
        .route("/api/admin/topups/{request_id}/review", post(review_top_up))
        .route("/api/admin/borrow", get(pending_borrows))
        .route("/api/admin/borrow/{request_id}/review", post(review_borrow))
        .route("/api/admin/team/{user_id}", get(get_team_permissions))
        .route("/api/admin/team/{user_id}", put(update_team_permissions))
        .route("/api/admin/tickets", get(list_all_tickets))
        .route(
            "/api/admin/tickets/{ticket_id}/reply",
            post(admin_reply_ticket),
        )
        .route("/api/admin/tickets/{ticket_id}/close", post(close_ticket))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(health_check))
        .route("/metrics", get(move || async move { metric_handle.render() }))
}
