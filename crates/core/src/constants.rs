/// Key holding the full user list
pub const USERS_KEY: &str = "users";

/// Key holding the active session object
pub const CURRENT_USER_KEY: &str = "current_user";

/// Per-user key prefixes; combined with a user id via `LedgerStore::user_key`
pub const ACCOUNTS_KEY_PREFIX: &str = "accounts";
pub const EXPENSES_KEY_PREFIX: &str = "expenses";
pub const INCOMES_KEY_PREFIX: &str = "incomes";
pub const GOALS_KEY_PREFIX: &str = "goals";
pub const SETTINGS_KEY_PREFIX: &str = "settings";

/// Household-shared keys (not user-scoped)
pub const FAMILY_MEMBERS_KEY: &str = "family_members";
pub const FAMILY_TASKS_KEY: &str = "family_tasks";
pub const FAMILY_GOALS_KEY: &str = "family_goals";

/// Decimal precision for derived percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
