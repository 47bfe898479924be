use crate::handlers::{
    account_type::__path_switch_account_type, admin_borrows::__path_pending_borrows,
    admin_projects::__path_list_all_projects,
    admin_tickets::{__path_admin_reply_ticket, __path_close_ticket, __path_list_all_tickets},
    admin_top_ups::__path_pending_top_ups,
    admin_users::{__path_list_users, __path_set_user_flags},
    admin_verify_investor::__path_verify_investor,
    audit_logs::__path_list_audit_logs, borrow::__path_submit_borrow_request,
    borrow_history::__path_borrow_history,
    borrower_profile::{__path_get_borrower_profile, __path_update_borrower_profile},
    create_project::__path_create_project, create_ticket::__path_create_ticket,
    current_user::__path_current_user_details, delete_project::__path_delete_project,
    get_project::__path_get_project, health::__path_health_check,
    invest::__path_submit_investment,
    investor_profile::{__path_get_investor_profile, __path_update_investor_profile},
    list_projects::__path_list_projects, my_investments::__path_my_investments,
    pending_investments::__path_pending_investments,
    project_interest::{__path_add_project_interest, __path_remove_project_interest},
    review_borrow::__path_review_borrow, review_investment::__path_review_investment,
    review_project::__path_review_project, review_top_up::__path_review_top_up,
    team_permissions::{__path_get_team_permissions, __path_update_team_permissions},
    ticket_message::__path_add_ticket_message, top_up::__path_submit_top_up,
    top_up_history::__path_top_up_history, update_project::__path_update_project,
    upsert_profile::__path_upsert_profile,
    user_settings::{__path_get_settings, __path_update_settings},
    user_tickets::{__path_ticket_detail, __path_user_tickets},
    wallet_balance::__path_wallet_balance,
};
use fundbridge_primitives::models::*;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check, current_user_details, upsert_profile, switch_account_type,
        get_investor_profile, update_investor_profile, get_borrower_profile,
        update_borrower_profile, get_settings, update_settings, wallet_balance,
        submit_top_up, top_up_history, submit_borrow_request, borrow_history,
        create_project, list_projects, get_project, update_project, delete_project,
        submit_investment, my_investments, add_project_interest, remove_project_interest,
        create_ticket, user_tickets, ticket_detail, add_ticket_message,
        list_users, set_user_flags, verify_investor, list_all_projects, review_project,
        pending_investments, review_investment, pending_top_ups, review_top_up,
        pending_borrows, review_borrow, get_team_permissions, update_team_permissions,
        list_all_tickets, admin_reply_ticket, close_ticket, list_audit_logs
    ),
    components(schemas(UpsertProfileRequest, CreateProjectRequest, InvestSubmitRequest)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Profile", description = "Subject profile and role management"),
        (name = "Wallet", description = "Balance and top-up claims"),
        (name = "Projects", description = "Funding campaigns"),
        (name = "Investments", description = "Investment request workflow"),
        (name = "Borrowing", description = "Borrow requests"),
        (name = "Support", description = "Support tickets"),
        (name = "Admin", description = "Back-office review and administration")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
