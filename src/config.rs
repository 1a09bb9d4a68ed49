use crate::errors::{PushcutError, PushcutResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pushcut.io/v1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings used to build a [`PushcutClient`](crate::PushcutClient)
///
/// Usually built in code, but can also be read from a TOML file:
///
/// ```toml
/// api_key = "my-api-key"
/// default_notification_name = "Doorbell"
/// timeout_secs = 10
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use pushcut::{PushcutClient, PushcutConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = PushcutConfig::load("pushcut.toml")?;
///     let client = PushcutClient::from_config(&config)?;
///     client.trigger_notification("Doorbell")?;
///     Ok(())
/// }
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PushcutConfig {
    pub api_key: String,
    pub default_notification_name: Option<String>,
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for PushcutConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_notification_name: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            user_agent: Some(format!("pushcut-rs/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl PushcutConfig {
    /// Config for the production endpoint with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_default_notification(mut self, name: impl Into<String>) -> Self {
        self.default_notification_name = Some(name.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Parse a config from TOML text; missing keys take their defaults.
    ///
    /// An empty `api_key` is accepted here and rejected when a client is built.
    pub fn from_toml_str(content: &str) -> PushcutResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML config file
    ///
    /// # Errors
    ///
    /// Returns [`PushcutError::Config`] if the file cannot be read or is not
    /// valid TOML.
    pub fn load(path: impl AsRef<Path>) -> PushcutResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PushcutError::config_file_with_source("Failed to read config file", path, e)
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            PushcutError::Config { message, source, .. } => PushcutError::Config {
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// The default notification name, ignoring an empty string
    pub fn default_notification(&self) -> Option<&str> {
        self.default_notification_name.as_deref().filter(|name| !name.is_empty())
    }
}

impl fmt::Debug for PushcutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushcutConfig")
            .field("api_key", &"<redacted>")
            .field("default_notification_name", &self.default_notification_name)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
