use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::security::Claims;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::WalletResponse;

pub struct WalletService;

impl WalletService {
    pub async fn balance(state: &AppState, claims: &Claims) -> Result<WalletResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let balance = WalletRepository::balance_of(&mut conn, user.id)?;

        Ok(WalletResponse { balance })
    }
}
