use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::settings::GhostSettings;

pub const DEFAULT_VERSION: &str = "v2";
pub const DEFAULT_PATH_PREFIX: &str = "ghost";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = concat!("ghost-admin/", env!("CARGO_PKG_VERSION"));

/// Connection settings owned by a [`crate::Client`].
///
/// The admin key is not validated here; a malformed key is only reported
/// when the first token is signed.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub url: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Zero falls back to the default.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_path_prefix() -> String {
    DEFAULT_PATH_PREFIX.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    /// An empty `key` means requests go out unauthenticated.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            url: url.into(),
            key: if key.is_empty() { None } else { Some(key) },
            version: default_version(),
            path_prefix: default_path_prefix(),
            user_agent: None,
            timeout_ms: default_timeout_ms(),
        }
    }

    pub fn from_settings(
        url: impl Into<String>,
        key: impl Into<String>,
        settings: &GhostSettings,
    ) -> Self {
        Self {
            version: settings.version.clone(),
            path_prefix: settings.path_prefix.clone(),
            user_agent: settings.user_agent.clone(),
            timeout_ms: settings.timeout_ms,
            ..Self::new(url, key)
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.path_prefix = path_prefix.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sub-millisecond remainders round up so a short timeout never becomes zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let mut millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        if timeout.subsec_nanos() % 1_000_000 != 0 {
            millis = millis.saturating_add(1);
        }
        self.timeout_ms = millis;
        self
    }

    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(DEFAULT_TIMEOUT_MS),
            ms => Duration::from_millis(ms),
        }
    }

    pub fn user_agent(&self) -> &str {
        match self.user_agent.as_deref() {
            Some(ua) if !ua.is_empty() => ua,
            _ => DEFAULT_USER_AGENT,
        }
    }

    /// Audience claim Ghost expects for admin tokens, e.g. `/v2/admin/`.
    pub fn audience(&self) -> String {
        format!("/{}/admin/", self.version)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the key id is printed; the secret half never reaches logs.
        let key = self
            .key
            .as_deref()
            .map(|k| match k.split_once(':') {
                Some((id, _)) => format!("{id}:<redacted>"),
                None => "<redacted>".to_string(),
            });

        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("key", &key)
            .field("version", &self.version)
            .field("path_prefix", &self.path_prefix)
            .field("user_agent", &self.user_agent)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
