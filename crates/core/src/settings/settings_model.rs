use serde::{Deserialize, Serialize};

/// Per-user application preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_currency: String,
    pub theme: String,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_currency: "USD".to_string(),
            theme: "light".to_string(),
            notifications_enabled: true,
        }
    }
}

/// Partial update merged into the stored settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub base_currency: Option<String>,
    pub theme: Option<String>,
    pub notifications_enabled: Option<bool>,
}
