pub const APP_DIR: &str = "redman";
pub const API_KEY_ENV: &str = "REDMAN_API_KEY";
pub const CONFIG_DIR_ENV: &str = "REDMAN_CONFIG_DIR";

/// Marker written into the description of every sprint and issue we create.
pub const CREATED_BY: &str = "created by \"redman\" tool";

pub const DEFAULT_ADMIN_PROJECT: &str = "admin_project";
pub const DEFAULT_SMTP_PORT: u16 = 25;

// Redmine caps list pages at 100 regardless of what is requested.
pub const PAGE_LIMIT: usize = 100;

pub const SPRINT_NAME_PREFIX: &str = "COPY";
pub const SPRINT_DATE_FORMAT: &str = "%m%d%y";

