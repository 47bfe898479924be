pub mod account_type;
pub mod admin_borrows;
pub mod admin_projects;
pub mod admin_tickets;
pub mod admin_top_ups;
pub mod admin_users;
pub mod admin_verify_investor;
pub mod audit_logs;
pub mod borrow;
pub mod borrow_history;
pub mod borrower_profile;
pub mod create_project;
pub mod create_ticket;
pub mod current_user;
pub mod delete_project;
pub mod get_project;
pub mod health;
pub mod invest;
pub mod investor_profile;
pub mod list_projects;
pub mod my_investments;
pub mod pending_investments;
pub mod project_interest;
pub mod review_borrow;
pub mod review_investment;
pub mod review_project;
pub mod review_top_up;
pub mod team_permissions;
pub mod ticket_message;
pub mod top_up;
pub mod top_up_history;
pub mod update_project;
pub mod upsert_profile;
pub mod user_settings;
pub mod user_tickets;
pub mod wallet_balance;
