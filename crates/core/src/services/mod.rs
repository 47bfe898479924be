pub mod audit_service;
pub mod borrow_service;
pub mod investment_service;
pub mod profile_service;
pub mod project_service;
pub mod settings_service;
pub mod team_service;
pub mod ticket_service;
pub mod topup_service;
pub mod user_service;
pub mod wallet_service;
