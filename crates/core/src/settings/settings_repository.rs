use crate::constants::SETTINGS_KEY_PREFIX;
use crate::errors::Result;
use crate::settings::settings_model::Settings;
use crate::settings::settings_traits::SettingsRepositoryTrait;
use crate::store::LedgerStore;

pub struct SettingsRepository {
    store: LedgerStore,
}

impl SettingsRepository {
    pub fn new(store: LedgerStore) -> Self {
        SettingsRepository { store }
    }

    fn key(user_id: &str) -> String {
        LedgerStore::user_key(SETTINGS_KEY_PREFIX, user_id)
    }
}

impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self, user_id: &str) -> Result<Settings> {
        Ok(self
            .store
            .get_object(&Self::key(user_id))?
            .unwrap_or_default())
    }

    fn save_settings(&self, user_id: &str, settings: &Settings) -> Result<()> {
        self.store.put_object(&Self::key(user_id), settings)
    }
}
