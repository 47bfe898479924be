use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::AccountType;
use fundbridge_primitives::models::entities::user::{NewUser, User};
use fundbridge_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_subject(
        conn: &mut PgConnection,
        subject: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::subject_id.eq(subject))
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Subjects are provisioned through the profile upsert; everything else
    /// treats an unknown subject as not-found.
    pub fn require_by_subject(conn: &mut PgConnection, subject: &str) -> Result<User, ApiError> {
        Self::find_by_subject(conn, subject)?.ok_or_else(|| ApiError::NotFound("User".into()))
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        let (has_borrower, has_investor) = match new_user.current_account_type {
            AccountType::Borrower => (true, false),
            AccountType::Investor => (false, true),
        };

        diesel::insert_into(users::table)
            .values((
                &new_user,
                users::has_borrower_account.eq(has_borrower),
                users::has_investor_account.eq(has_investor),
            ))
            .get_result::<User>(conn)
            .map_err(ApiError::from)
    }

    pub fn update_profile(
        conn: &mut PgConnection,
        user_id: Uuid,
        display_name: &str,
        email: Option<&str>,
    ) -> Result<User, ApiError> {
        diesel::update(users::table.find(user_id))
            .set((
                users::display_name.eq(display_name),
                users::email.eq(email),
                users::updated_at.eq(Utc::now()),
            ))
            .get_result::<User>(conn)
            .map_err(ApiError::from)
    }

    /// Switching opens the corresponding role flag on first use and keeps it
    /// open afterwards.
    pub fn set_account_type(
        conn: &mut PgConnection,
        user_id: Uuid,
        account_type: AccountType,
    ) -> Result<User, ApiError> {
        let query = diesel::update(users::table.find(user_id));

        match account_type {
            AccountType::Borrower => query
                .set((
                    users::current_account_type.eq(account_type),
                    users::has_borrower_account.eq(true),
                    users::updated_at.eq(Utc::now()),
                ))
                .get_result::<User>(conn),
            AccountType::Investor => query
                .set((
                    users::current_account_type.eq(account_type),
                    users::has_investor_account.eq(true),
                    users::updated_at.eq(Utc::now()),
                ))
                .get_result::<User>(conn),
        }
        .map_err(ApiError::from)
    }

    pub fn set_flags(
        conn: &mut PgConnection,
        user_id: Uuid,
        is_admin: Option<bool>,
        suspended: Option<bool>,
    ) -> Result<User, ApiError> {
        let user = Self::find_by_id(conn, user_id)?.ok_or_else(|| ApiError::NotFound("User".into()))?;

        diesel::update(users::table.find(user_id))
            .set((
                users::is_admin.eq(is_admin.unwrap_or(user.is_admin)),
                users::suspended.eq(suspended.unwrap_or(user.suspended)),
                users::updated_at.eq(Utc::now()),
            ))
            .get_result::<User>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<User>, ApiError> {
        users::table
            .order(users::created_at.desc())
            .load::<User>(conn)
            .map_err(ApiError::from)
    }
}
