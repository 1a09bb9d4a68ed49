//! Error types for the Pushcut client
//!
//! Every failure the client can produce is a variant of [`PushcutError`]. API
//! failures are classified by HTTP status so callers can tell problems they can
//! fix (bad request, credentials, subscription, unknown names) from problems with
//! the remote automation server.

use thiserror::Error;
use std::path::PathBuf;

/// Main client error type
#[derive(Error, Debug)]
pub enum PushcutError {
    // API errors, selected by HTTP status code
    #[error("Bad request (HTTP {status_code}): {message}")]
    BadRequest {
        status_code: u16,
        message: String,
    },

    #[error("Unauthorized (HTTP {status_code}): {message}")]
    Unauthorized {
        status_code: u16,
        message: String,
    },

    #[error("Subscription required (HTTP {status_code}): {message}")]
    SubscriptionRequired {
        status_code: u16,
        message: String,
    },

    #[error("Not found (HTTP {status_code}): {message}")]
    NotFound {
        status_code: u16,
        message: String,
    },

    #[error("Automation server not running (HTTP {status_code}): {message}")]
    AutomationServerNotRunning {
        status_code: u16,
        message: String,
    },

    #[error("Automation server timed out (HTTP {status_code}): {message}")]
    AutomationServerTimeout {
        status_code: u16,
        message: String,
    },

    #[error("Error with http status code {status_code}: {message}")]
    Api {
        status_code: u16,
        message: String,
    },

    // Local errors
    #[error("No notification name given and no default notification name configured")]
    MissingNotificationName,

    #[error("HTTP request failed: {method} {url}")]
    Http {
        method: String,
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to decode response: {context}")]
    Decode {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid value for header '{name}'")]
    InvalidHeader {
        name: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using PushcutError
pub type PushcutResult<T> = Result<T, PushcutError>;

impl PushcutError {
    /// Classify a non-2xx API response by status code
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            400 => Self::BadRequest { status_code, message },
            401 => Self::Unauthorized { status_code, message },
            402 => Self::SubscriptionRequired { status_code, message },
            404 => Self::NotFound { status_code, message },
            502 => Self::AutomationServerNotRunning { status_code, message },
            504 => Self::AutomationServerTimeout { status_code, message },
            _ => Self::Api { status_code, message },
        }
    }

    /// Build an API error from a failed response's status and body text.
    ///
    /// The message is the `"error"` field of a JSON body when there is one,
    /// otherwise the raw body text.
    pub fn from_response(status_code: u16, body: &str) -> Self {
        Self::from_status(status_code, extract_error_message(body))
    }

    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Config error for a file, with source
    pub fn config_file_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Decode error with source
    pub fn decode_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new InvalidHeader error with source
    pub fn invalid_header(
        name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status code returned by the API, if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest { status_code, .. }
            | Self::Unauthorized { status_code, .. }
            | Self::SubscriptionRequired { status_code, .. }
            | Self::NotFound { status_code, .. }
            | Self::AutomationServerNotRunning { status_code, .. }
            | Self::AutomationServerTimeout { status_code, .. }
            | Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Message reported by the API, if this is an API error
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::SubscriptionRequired { message, .. }
            | Self::NotFound { message, .. }
            | Self::AutomationServerNotRunning { message, .. }
            | Self::AutomationServerTimeout { message, .. }
            | Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the caller can fix this by changing the request or account
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest { .. }
                | Self::Unauthorized { .. }
                | Self::SubscriptionRequired { .. }
                | Self::NotFound { .. }
                | Self::MissingNotificationName
        )
    }

    /// Whether the remote automation server was unavailable or too slow
    pub fn is_automation_server_error(&self) -> bool {
        matches!(
            self,
            Self::AutomationServerNotRunning { .. } | Self::AutomationServerTimeout { .. }
        )
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::Unauthorized { .. } => "unauthorized",
            Self::SubscriptionRequired { .. } => "subscription_required",
            Self::NotFound { .. } => "not_found",
            Self::AutomationServerNotRunning { .. } | Self::AutomationServerTimeout { .. } => {
                "automation_server"
            },
            Self::Api { .. } => "api",
            Self::MissingNotificationName => "usage",
            Self::Http { .. } => "network",
            Self::Decode { .. } => "serialization",
            Self::InvalidUrl { .. } | Self::InvalidHeader { .. } => "request",
            Self::Config { .. } => "config",
        }
    }
}

/// Pick the human-readable message out of an error response body.
///
/// A missing or `null` `"error"` field falls back to the raw body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("error") {
            Some(serde_json::Value::String(message)) => Some(message.clone()),
            Some(other) if !other.is_null() => Some(other.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| body.to_string())
}

impl From<toml::de::Error> for PushcutError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.message().to_string(),
            path: None,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        use PushcutError::*;

        assert!(matches!(PushcutError::from_status(400, "x"), BadRequest { .. }));
        assert!(matches!(PushcutError::from_status(401, "x"), Unauthorized { .. }));
        assert!(matches!(PushcutError::from_status(402, "x"), SubscriptionRequired { .. }));
        assert!(matches!(PushcutError::from_status(404, "x"), NotFound { .. }));
        assert!(matches!(PushcutError::from_status(502, "x"), AutomationServerNotRunning { .. }));
        assert!(matches!(PushcutError::from_status(504, "x"), AutomationServerTimeout { .. }));
        assert!(matches!(PushcutError::from_status(500, "x"), Api { .. }));
        assert!(matches!(PushcutError::from_status(418, "x"), Api { .. }));
    }

    #[test]
    fn test_status_and_message_preserved() {
        for code in [400u16, 401, 402, 404, 500, 502, 504] {
            let err = PushcutError::from_status(code, "boom");
            assert_eq!(err.status_code(), Some(code));
            assert_eq!(err.message(), Some("boom"));
        }
    }

    #[test]
    fn test_message_prefers_json_error_field() {
        let err = PushcutError::from_response(404, r#"{"error":"Notification not found"}"#);
        assert!(matches!(err, PushcutError::NotFound { .. }));
        assert_eq!(err.message(), Some("Notification not found"));
    }

    #[test]
    fn test_message_falls_back_to_raw_text() {
        let err = PushcutError::from_response(502, "Bad Gateway");
        assert_eq!(err.message(), Some("Bad Gateway"));

        let body = r#"{"detail":"something else"}"#;
        let err = PushcutError::from_response(500, body);
        assert_eq!(err.message(), Some(body));
    }

    #[test]
    fn test_error_display() {
        let err = PushcutError::from_status(500, "internal");
        assert_eq!(err.to_string(), "Error with http status code 500: internal");

        let err = PushcutError::from_status(401, "bad key");
        assert_eq!(err.to_string(), "Unauthorized (HTTP 401): bad key");
    }

    #[test]
    fn test_error_classification() {
        assert!(PushcutError::from_status(402, "").is_caller_error());
        assert!(PushcutError::MissingNotificationName.is_caller_error());
        assert!(!PushcutError::from_status(502, "").is_caller_error());

        assert!(PushcutError::from_status(504, "").is_automation_server_error());
        assert!(!PushcutError::from_status(500, "").is_automation_server_error());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(PushcutError::from_status(502, "").category(), "automation_server");
        assert_eq!(PushcutError::config("test").category(), "config");
        assert_eq!(PushcutError::MissingNotificationName.status_code(), None);
    }

    #[test]
    fn test_null_error_field_falls_back_to_raw_text() {
        let body = r#"{"error":null}"#;
        let err = PushcutError::from_response(400, body);
        assert!(matches!(err, PushcutError::BadRequest { .. }));
        assert_eq!(err.message(), Some(body));
    }

    #[test]
    fn test_non_string_error_field_is_stringified() {
        let err = PushcutError::from_response(400, r#"{"error":{"code":7}}"#);
        assert_eq!(err.message(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = PushcutError::decode_with_source("devices response", json_err);

        assert_eq!(err.to_string(), "Failed to decode response: devices response");
        assert_eq!(err.category(), "serialization");
        assert_eq!(err.status_code(), None);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let err: PushcutError = toml_err.into();

        match err {
            PushcutError::Config { path, source, .. } => {
                assert!(path.is_none());
                assert!(source.is_some());
            },
            _ => panic!("Wrong error type"),
        }
    }
}
