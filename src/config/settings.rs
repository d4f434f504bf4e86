use serde::{Deserialize, Serialize};

use super::client::{DEFAULT_PATH_PREFIX, DEFAULT_TIMEOUT_MS, DEFAULT_VERSION};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ghost: GhostSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Client tuning shared by every site the sample talks to. The URL and
/// admin key come from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostSettings {
    pub version: String,
    pub path_prefix: String,
    pub user_agent: Option<String>,
    pub timeout_ms: u64,
}

impl Default for GhostSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            user_agent: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Settings {
    /// Loads `path` if it exists, then overlays `GHOST_ADMIN__*` variables,
    /// e.g. `GHOST_ADMIN__GHOST__VERSION=v3`.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("GHOST_ADMIN").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
