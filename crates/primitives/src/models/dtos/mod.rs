pub mod admin_dto;
pub mod borrow_dto;
pub mod investment_dto;
pub mod profile_dto;
pub mod project_dto;
pub mod settings_dto;
pub mod ticket_dto;
pub mod topup_dto;
pub mod wallet_dto;

pub use admin_dto::*;
pub use borrow_dto::*;
pub use investment_dto::*;
pub use profile_dto::*;
pub use project_dto::*;
pub use settings_dto::*;
pub use ticket_dto::*;
pub use topup_dto::*;
pub use wallet_dto::*;
