use std::sync::Arc;

use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::settings::settings_model::{Settings, SettingsUpdate};
use crate::settings::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};

/// Service for per-user application preferences
pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self, user_id: &str) -> Result<Settings> {
        self.settings_repository.get_settings(user_id)
    }

    fn update_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<Settings> {
        let mut settings = self.settings_repository.get_settings(user_id)?;

        if let Some(ref currency) = update.base_currency {
            if currency.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Base currency cannot be empty".to_string(),
                )));
            }
            settings.base_currency = currency.clone();
        }
        if let Some(ref theme) = update.theme {
            settings.theme = theme.clone();
        }
        if let Some(enabled) = update.notifications_enabled {
            settings.notifications_enabled = enabled;
        }

        debug!("Updating settings for user {}", user_id);
        self.settings_repository.save_settings(user_id, &settings)?;
        Ok(settings)
    }

    fn get_base_currency(&self, user_id: &str) -> Result<String> {
        Ok(self.settings_repository.get_settings(user_id)?.base_currency)
    }

    fn update_base_currency(&self, user_id: &str, currency: &str) -> Result<()> {
        self.update_settings(
            user_id,
            &SettingsUpdate {
                base_currency: Some(currency.to_string()),
                ..Default::default()
            },
        )?;
        Ok(())
    }
}
