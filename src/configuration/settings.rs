use crate::configuration::constants::common::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, ENV_PREFIX};
use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub client: ClientSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportSettings {
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub tree: bool,
}

/// Options applied to every client the factory builds.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_timeout", with = "crate::configuration::deserialize::duration")]
    pub timeout: Duration,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            max_redirects: default_max_redirects(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

impl Settings {
    /// Loads settings from `file` (when given) and `SUITETRACE_*` variables,
    /// e.g. `SUITETRACE_REPORT__PRETTY=true`.
    pub fn load(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX).separator("__"))?;
        config.try_into()
    }
}
