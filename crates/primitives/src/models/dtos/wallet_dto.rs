use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct WalletResponse {
    /// Whole currency units. Zero when no wallet row exists yet.
    pub balance: i64,
}
