use crate::models::entities::UserSettings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsDto {
    pub notifications_enabled: bool,
    pub language: String,
}

impl From<UserSettings> for SettingsDto {
    fn from(settings: UserSettings) -> Self {
        Self {
            notifications_enabled: settings.notifications_enabled,
            language: settings.language,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateSettingsRequest {
    pub notifications_enabled: bool,
    #[validate(length(min = 2, max = 8))]
    pub language: String,
}
