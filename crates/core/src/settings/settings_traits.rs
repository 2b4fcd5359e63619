use crate::errors::Result;
use crate::settings::settings_model::{Settings, SettingsUpdate};

/// Trait for settings repository operations
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Returns defaults when no settings were ever stored for the user.
    fn get_settings(&self, user_id: &str) -> Result<Settings>;
    fn save_settings(&self, user_id: &str, settings: &Settings) -> Result<()>;
}

/// Trait for settings service operations
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self, user_id: &str) -> Result<Settings>;
    fn update_settings(&self, user_id: &str, update: &SettingsUpdate) -> Result<Settings>;
    fn get_base_currency(&self, user_id: &str) -> Result<String>;
    fn update_base_currency(&self, user_id: &str, currency: &str) -> Result<()>;
}
