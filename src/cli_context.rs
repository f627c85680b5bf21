use std::path::PathBuf;
use std::sync::Arc;

use crate::client::RedmineClient;
use crate::config::{default_config_dir, load_settings, Settings};
use crate::error::RedmanResult;

/// Per-run state: the selected target's settings and the one client built from them.
pub struct CliContext {
    settings: Settings,
    client: Option<Arc<RedmineClient>>,
}

impl CliContext {
    /// Load the settings for `target` from `config_dir` (or the default directory).
    pub fn load(target: &str, config_dir: Option<PathBuf>) -> RedmanResult<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => default_config_dir()?,
        };
        let settings = load_settings(target, &config_dir)?;
        Ok(Self {
            settings,
            client: None,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The run's client, constructed on first use and reused afterwards.
    pub fn client(&mut self) -> RedmanResult<Arc<RedmineClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(RedmineClient::new(
            &self.settings.api_url,
            self.settings.api_key()?,
            self.settings.verify_tls,
        )?);
        self.client = Some(client.clone());
        Ok(client)
    }
}
