use chrono::Utc;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::{NewUserSettings, UserSettings};
use fundbridge_primitives::schema::user_settings;
use uuid::Uuid;

pub struct SettingsRepository;

impl SettingsRepository {
    pub fn find(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<UserSettings>, ApiError> {
        user_settings::table
            .find(user_id)
            .first::<UserSettings>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn upsert(
        conn: &mut PgConnection,
        settings: NewUserSettings,
    ) -> Result<UserSettings, ApiError> {
        diesel::insert_into(user_settings::table)
            .values(&settings)
            .on_conflict(user_settings::user_id)
            .do_update()
            .set((
                user_settings::notifications_enabled.eq(settings.notifications_enabled),
                user_settings::language.eq(settings.language),
                user_settings::updated_at.eq(Utc::now()),
            ))
            .get_result::<UserSettings>(conn)
            .map_err(ApiError::from)
    }
}
