pub mod audit_repository;
pub mod borrow_repository;
pub mod funding_repository;
pub mod interest_repository;
pub mod investment_repository;
pub mod profile_repository;
pub mod project_repository;
pub mod settings_repository;
pub mod team_repository;
pub mod ticket_repository;
pub mod topup_repository;
pub mod user_repository;
pub mod wallet_repository;
