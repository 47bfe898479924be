use crate::app_state::AppState;
use crate::repositories::team_repository::TeamRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use diesel::PgConnection;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::entities::User;
use tracing::warn;

/// The single capability gate for back-office mutations. `is_admin` grants
/// every capability; otherwise the caller needs a matching row in
/// `team_permissions`.
pub struct AccessControl;

impl AccessControl {
    pub fn check(conn: &mut PgConnection, user: &User, capability: Capability) -> Result<bool, ApiError> {
        if user.is_admin {
            return Ok(true);
        }
        TeamRepository::has_capability(conn, user.id, capability)
    }

    pub fn require(
        conn: &mut PgConnection,
        user: &User,
        capability: Capability,
    ) -> Result<(), ApiError> {
        if Self::check(conn, user, capability)? {
            Ok(())
        } else {
            warn!(user_id = %user.id, %capability, "capability check refused");
            Err(ApiError::Forbidden(format!(
                "Missing capability: {}",
                capability
            )))
        }
    }

    /// Resolve the calling subject and enforce a capability in one step.
    /// Suspended reviewers are refused outright.
    pub fn require_reviewer(
        state: &AppState,
        claims: &Claims,
        capability: Capability,
    ) -> Result<User, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        if user.suspended {
            return Err(ApiError::Forbidden("Account is suspended".into()));
        }
        Self::require(&mut conn, &user, capability)?;
        Ok(user)
    }
}
