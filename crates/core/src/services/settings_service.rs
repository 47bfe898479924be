use crate::app_state::AppState;
use crate::repositories::settings_repository::SettingsRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::{SettingsDto, UpdateSettingsRequest};
use fundbridge_primitives::models::entities::NewUserSettings;

const DEFAULT_LANGUAGE: &str = "en";

pub struct SettingsService;

impl SettingsService {
    pub async fn get(state: &AppState, claims: &Claims) -> Result<SettingsDto, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let settings = SettingsRepository::find(&mut conn, user.id)?;
        Ok(settings.map(SettingsDto::from).unwrap_or(SettingsDto {
            notifications_enabled: true,
            language: DEFAULT_LANGUAGE.to_string(),
        }))
    }

    pub async fn update(
        state: &AppState,
        claims: &Claims,
        req: UpdateSettingsRequest,
    ) -> Result<SettingsDto, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let settings = SettingsRepository::upsert(
            &mut conn,
            NewUserSettings {
                user_id: user.id,
                notifications_enabled: req.notifications_enabled,
                language: &req.language,
            },
        )?;

        Ok(SettingsDto::from(settings))
    }
}
