//! Payloads for running shortcuts and HomeKit scenes on an automation server

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use super::sparse::{put_str, JsonMap};

/// How long the automation server may take before the action is abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeout {
    /// Whole seconds, sent as a bare number string (`30` becomes `"30"`)
    Seconds(u64),
    /// A pre-formatted value passed through unchanged, e.g. `"nowait"`
    Text(String),
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(seconds) => write!(f, "{}", seconds),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for Timeout {
    fn from(seconds: u64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for Timeout {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Timeout {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// How long the automation server waits before running the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delay {
    /// Sent as total whole seconds with an `s` suffix (90 seconds becomes `"90s"`)
    Duration(Duration),
    /// A pre-formatted value passed through unchanged, e.g. `"10m"`
    Text(String),
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration(duration) => write!(f, "{}s", duration.as_secs()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<Duration> for Delay {
    fn from(duration: Duration) -> Self {
        Self::Duration(duration)
    }
}

impl From<&str> for Delay {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Delay {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Scheduling options shared by every automation server call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub timeout: Option<Timeout>,
    pub delay: Option<Delay>,
    /// Caller-chosen id that can later be passed to `cancel_server_action`
    pub identifier: Option<String>,
}

impl ExecutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn delay(mut self, delay: impl Into<Delay>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// Body of an `execute` request.
///
/// Exactly one of `shortcut` or `homekit` is expected by the API, but this is
/// not checked locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerAction {
    pub shortcut: Option<String>,
    pub input: Option<String>,
    pub homekit: Option<String>,
    pub options: ExecutionOptions,
}

impl ServerAction {
    /// Run the named shortcut
    pub fn shortcut(name: impl Into<String>) -> Self {
        Self {
            shortcut: Some(name.into()),
            ..Default::default()
        }
    }

    /// Trigger the named HomeKit scene
    pub fn homekit(scene: impl Into<String>) -> Self {
        Self {
            homekit: Some(scene.into()),
            ..Default::default()
        }
    }

    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn options(mut self, options: ExecutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn as_map(&self) -> JsonMap {
        let timeout = self.options.timeout.as_ref().map(Timeout::to_string);
        let delay = self.options.delay.as_ref().map(Delay::to_string);

        let mut map = JsonMap::new();
        put_str(&mut map, "shortcut", self.shortcut.as_deref());
        put_str(&mut map, "input", self.input.as_deref());
        put_str(&mut map, "homekit", self.homekit.as_deref());
        put_str(&mut map, "timeout", timeout.as_deref());
        put_str(&mut map, "delay", delay.as_deref());
        put_str(&mut map, "identifier", self.options.identifier.as_deref());
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.as_map())
    }
}

impl Serialize for ServerAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_map().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timeout_formatting() {
        assert_eq!(Timeout::from(30u64).to_string(), "30");
        assert_eq!(Timeout::from("30s").to_string(), "30s");
        assert_eq!(Timeout::from(0u64).to_string(), "0");
    }

    #[test]
    fn test_delay_formatting() {
        assert_eq!(Delay::from(Duration::from_secs(90)).to_string(), "90s");
        assert_eq!(Delay::from(Duration::from_millis(90_900)).to_string(), "90s");
        assert_eq!(Delay::from(Duration::from_secs(2 * 86_400 + 5)).to_string(), "172805s");
        assert_eq!(Delay::from("10m").to_string(), "10m");
    }

    #[test]
    fn test_empty_action_is_empty_map() {
        assert!(ServerAction::default().as_map().is_empty());
    }

    #[test]
    fn test_shortcut_payload() {
        let action = ServerAction::shortcut("Backup")
            .input("photos")
            .options(
                ExecutionOptions::new()
                    .timeout(30u64)
                    .delay(Duration::from_secs(90))
                    .identifier("backup-1"),
            );

        assert_eq!(
            action.to_value(),
            json!({
                "shortcut": "Backup",
                "input": "photos",
                "timeout": "30",
                "delay": "90s",
                "identifier": "backup-1"
            })
        );
    }

    #[test]
    fn test_string_values_pass_through() {
        let action = ServerAction::homekit("Good Night")
            .options(ExecutionOptions::new().timeout("nowait").delay("1h"));

        assert_eq!(
            action.to_value(),
            json!({"homekit": "Good Night", "timeout": "nowait", "delay": "1h"})
        );
    }

    #[test]
    fn test_zero_duration_is_sent() {
        let action = ServerAction::shortcut("Now")
            .options(ExecutionOptions::new().timeout(0u64).delay(Duration::ZERO));
        assert_eq!(
            action.to_value(),
            json!({"shortcut": "Now", "timeout": "0", "delay": "0s"})
        );
    }

    #[test]
    fn test_empty_strings_are_omitted() {
        let action = ServerAction::shortcut("Run")
            .input("")
            .options(ExecutionOptions::new().identifier(""));
        assert_eq!(action.to_value(), json!({"shortcut": "Run"}));
    }
}
