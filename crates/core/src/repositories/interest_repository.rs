use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::project_interest::NewProjectInterest;
use fundbridge_primitives::schema::project_interests;
use uuid::Uuid;

pub struct InterestRepository;

impl InterestRepository {
    /// Idempotent: re-marking interest is a no-op.
    pub fn add(conn: &mut PgConnection, project_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        diesel::insert_into(project_interests::table)
            .values(&NewProjectInterest {
                project_id,
                user_id,
            })
            .on_conflict((project_interests::project_id, project_interests::user_id))
            .do_nothing()
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn remove(
        conn: &mut PgConnection,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ApiError> {
        diesel::delete(
            project_interests::table
                .filter(project_interests::project_id.eq(project_id))
                .filter(project_interests::user_id.eq(user_id)),
        )
        .execute(conn)
        .map_err(ApiError::from)?;
        Ok(())
    }
}
