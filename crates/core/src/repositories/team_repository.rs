use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::entities::team_permission::NewTeamPermission;
use fundbridge_primitives::schema::team_permissions;
use std::str::FromStr;
use uuid::Uuid;

pub struct TeamRepository;

impl TeamRepository {
    pub fn has_capability(
        conn: &mut PgConnection,
        user_id: Uuid,
        capability: Capability,
    ) -> Result<bool, ApiError> {
        team_permissions::table
            .filter(team_permissions::user_id.eq(user_id))
            .filter(team_permissions::capability.eq(capability.to_string()))
            .select(team_permissions::id)
            .first::<Uuid>(conn)
            .optional()
            .map(|found| found.is_some())
            .map_err(ApiError::from)
    }

    /// Tags that no longer parse (removed capabilities) are skipped.
    pub fn capabilities_of(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Capability>, ApiError> {
        let tags = team_permissions::table
            .filter(team_permissions::user_id.eq(user_id))
            .select(team_permissions::capability)
            .load::<String>(conn)
            .map_err(ApiError::from)?;

        Ok(tags
            .iter()
            .filter_map(|tag| Capability::from_str(tag).ok())
            .collect())
    }

    /// Replace the full grant set in one transaction.
    pub fn replace(
        conn: &mut PgConnection,
        user_id: Uuid,
        capabilities: &[Capability],
    ) -> Result<(), ApiError> {
        conn.transaction::<(), ApiError, _>(|conn| {
            diesel::delete(
                team_permissions::table.filter(team_permissions::user_id.eq(user_id)),
            )
            .execute(conn)?;

            let rows: Vec<NewTeamPermission> = capabilities
                .iter()
                .map(|capability| NewTeamPermission {
                    user_id,
                    capability: capability.to_string(),
                })
                .collect();

            diesel::insert_into(team_permissions::table)
                .values(&rows)
                .execute(conn)?;

            Ok(())
        })
    }
}
