use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::wallet::NewWallet;
use fundbridge_primitives::schema::wallets;
use uuid::Uuid;

pub struct WalletRepository;

impl WalletRepository {
    /// Missing wallet rows read as a zero balance; the row is only created
    /// by the first credit.
    pub fn balance_of(conn: &mut PgConnection, user_id: Uuid) -> Result<i64, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .select(wallets::balance)
            .first::<i64>(conn)
            .optional()
            .map(|balance| balance.unwrap_or(0))
            .map_err(ApiError::from)
    }

    pub fn credit(conn: &mut PgConnection, user_id: Uuid, amount: i64) -> Result<i64, ApiError> {
        diesel::insert_into(wallets::table)
            .values(&NewWallet {
                user_id,
                balance: amount,
            })
            .on_conflict(wallets::user_id)
            .do_update()
            .set((
                wallets::balance.eq(wallets::balance + amount),
                wallets::updated_at.eq(Utc::now()),
            ))
            .returning(wallets::balance)
            .get_result::<i64>(conn)
            .map_err(ApiError::from)
    }

    /// Debit guarded in a single statement: the WHERE clause refuses to take
    /// the balance negative, so concurrent approvals cannot both spend the
    /// same funds. `None` means no wallet row or insufficient balance.
    pub fn debit_if_sufficient(
        conn: &mut PgConnection,
        user_id: Uuid,
        amount: i64,
    ) -> Result<Option<i64>, ApiError> {
        diesel::update(
            wallets::table
                .filter(wallets::user_id.eq(user_id))
                .filter(wallets::balance.ge(amount)),
        )
        .set((
            wallets::balance.eq(wallets::balance - amount),
            wallets::updated_at.eq(Utc::now()),
        ))
        .returning(wallets::balance)
        .get_result::<i64>(conn)
        .optional()
        .map_err(ApiError::from)
    }
}
