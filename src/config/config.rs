use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, APP_DIR, CONFIG_DIR_ENV, DEFAULT_ADMIN_PROJECT};
use crate::error::{RedmanError, RedmanResult};
use crate::models::TrackerIds;

/// Settings for one deployment target, read once at the start of a run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
    #[serde(default)]
    pub verify_tls: bool,
    /// The project under which all sprints are created
    #[serde(default = "default_project_name")]
    pub project_name: String,
    pub start_date: Option<String>,
    pub repeat_after: Option<i64>,
    pub templates: Templates,
    pub email: EmailSettings,
    #[serde(default)]
    pub trackers: TrackerIds,
    #[serde(default)]
    pub issue_defaults: IssueDefaults,
    #[serde(default)]
    pub recreate: RecreateSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Templates {
    pub brown: String,
    pub green: String,
    pub misc: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmailSettings {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    /// `host` or `host:port`
    pub server: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IssueDefaults {
    pub new_status_id: u64,
    pub story_priority_id: u64,
    pub task_priority_id: u64,
}

impl Default for IssueDefaults {
    fn default() -> Self {
        IssueDefaults {
            new_status_id: 1,
            story_priority_id: 1,
            task_priority_id: 2,
        }
    }
}

/// How long to wait for a deleted sprint to disappear before recreating it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RecreateSettings {
    pub poll_attempts: u32,
    pub poll_interval_ms: u64,
}

impl Default for RecreateSettings {
    fn default() -> Self {
        RecreateSettings {
            poll_attempts: 10,
            poll_interval_ms: 500,
        }
    }
}

impl RecreateSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn default_project_name() -> String {
    DEFAULT_ADMIN_PROJECT.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateColor {
    Brown,
    Green,
    Misc,
}

impl TemplateColor {
    pub const NAMES: [&'static str; 3] = ["brown", "green", "misc"];
}

impl FromStr for TemplateColor {
    type Err = RedmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brown" => Ok(TemplateColor::Brown),
            "green" => Ok(TemplateColor::Green),
            "misc" => Ok(TemplateColor::Misc),
            other => Err(RedmanError::InvalidInput(format!(
                "Unknown template '{}', expected one of: {}",
                other,
                TemplateColor::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for TemplateColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateColor::Brown => "brown",
            TemplateColor::Green => "green",
            TemplateColor::Misc => "misc",
        };
        f.write_str(name)
    }
}

impl Settings {
    pub fn template_name(&self, color: TemplateColor) -> &str {
        match color {
            TemplateColor::Brown => &self.templates.brown,
            TemplateColor::Green => &self.templates.green,
            TemplateColor::Misc => &self.templates.misc,
        }
    }

    pub fn api_key(&self) -> RedmanResult<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                RedmanError::ConfigError(format!(
                    "No API key found. Set {} or add \"api_key\" to the settings file.",
                    API_KEY_ENV
                ))
            })
    }

    fn validate(&self) -> RedmanResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(RedmanError::ConfigError("\"api_url\" must not be empty".to_string()));
        }
        if self.project_name.trim().is_empty() {
            return Err(RedmanError::ConfigError("\"project_name\" must not be empty".to_string()));
        }
        self.api_key()?;
        Ok(())
    }
}

/// `$REDMAN_CONFIG_DIR`, falling back to the platform config directory.
pub fn default_config_dir() -> RedmanResult<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| RedmanError::ConfigError("Could not find a configuration directory".to_string()))
}

pub fn settings_path(config_dir: &Path, target: &str) -> PathBuf {
    config_dir.join(format!("{}.json", target))
}

/// Load `<config_dir>/<target>.json`. The API key may come from `$REDMAN_API_KEY` instead.
pub fn load_settings(target: &str, config_dir: &Path) -> RedmanResult<Settings> {
    let path = settings_path(config_dir, target);
    if !path.is_file() {
        return Err(RedmanError::ConfigError(format!(
            "Please create the '{}' file",
            path.display()
        )));
    }

    let raw = fs::read_to_string(&path).map_err(|e| {
        RedmanError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    let mut settings: Settings = serde_json::from_str(&raw).map_err(|e| {
        RedmanError::ConfigError(format!("Invalid settings in '{}': {}", path.display(), e))
    })?;

    if let Ok(key) = env::var(API_KEY_ENV) {
        settings.api_key = Some(key);
    }

    settings.validate()?;
    Ok(settings)
}
