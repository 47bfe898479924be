pub mod audit_log;
pub mod borrow_request;
pub mod borrower_profile;
pub mod enum_types;
pub mod funding_contribution;
pub mod investment_request;
pub mod investor_profile;
pub mod project;
pub mod project_interest;
pub mod support_ticket;
pub mod team_permission;
pub mod topup_request;
pub mod user;
pub mod user_settings;
pub mod wallet;

pub use audit_log::*;
pub use borrow_request::*;
pub use borrower_profile::*;
pub use enum_types::*;
pub use funding_contribution::*;
pub use investment_request::*;
pub use investor_profile::*;
pub use project::*;
pub use project_interest::*;
pub use support_ticket::*;
pub use team_permission::*;
pub use topup_request::*;
pub use user::*;
pub use user_settings::*;
pub use wallet::*;
