pub mod config;

pub use config::{
    default_config_dir, load_settings, settings_path, EmailSettings, IssueDefaults, RecreateSettings,
    Settings, TemplateColor, Templates,
};
