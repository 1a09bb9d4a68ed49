//! Blocking client for the Pushcut web API
//!
//! Every operation goes through [`PushcutClient::perform_request`], which adds the
//! API key, sends the request and turns non-2xx responses into a
//! [`PushcutError`] chosen by status code. Nothing is retried.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Method;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::{PushcutConfig, DEFAULT_TIMEOUT_SECS};
use crate::errors::{PushcutError, PushcutResult};
use crate::models::{Device, ExecutionOptions, Notification, NotificationTemplate, ServerAction};

const API_KEY_HEADER: &str = "api-key";

/// Client for one Pushcut account.
///
/// Cheap to share by reference across threads; it holds no mutable state.
/// Must not be created or used from inside an async runtime, since it wraps
/// [`reqwest::blocking::Client`].
pub struct PushcutClient {
    client: Client,
    base_url: Url,
    default_notification_name: Option<String>,
}

impl PushcutClient {
    /// Create a client for the production endpoint
    pub fn new(
        api_key: impl Into<String>,
        default_notification_name: Option<String>,
    ) -> PushcutResult<Self> {
        let config = PushcutConfig {
            api_key: api_key.into(),
            default_notification_name,
            ..Default::default()
        };
        Self::from_config(&config)
    }

    /// Create a client from explicit configuration
    ///
    /// # Errors
    ///
    /// [`PushcutError::Config`] if the API key is empty,
    /// [`PushcutError::InvalidUrl`] if the base URL cannot take path segments.
    pub fn from_config(config: &PushcutConfig) -> PushcutResult<Self> {
        if config.api_key.is_empty() {
            return Err(PushcutError::config("api_key is missing or empty"));
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| PushcutError::InvalidUrl {
            url: config.base_url.clone(),
            source: Some(Box::new(e)),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PushcutError::InvalidUrl {
                url: config.base_url.clone(),
                source: None,
            });
        }

        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let mut client_builder = Client::builder()
            .timeout(timeout)
            .default_headers(Self::build_headers(&config.api_key)?);

        if let Some(user_agent) = &config.user_agent {
            client_builder = client_builder.user_agent(user_agent.as_str());
        }

        let client = client_builder
            .build()
            .map_err(|e| PushcutError::config_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url,
            default_notification_name: config.default_notification().map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_notification_name(&self) -> Option<&str> {
        self.default_notification_name.as_deref()
    }

    /// List the devices registered with the account
    pub fn devices(&self) -> PushcutResult<Vec<Device>> {
        let body = self.perform_request(Method::GET, &["devices"], None)?;
        serde_json::from_str(&body)
            .map_err(|e| PushcutError::decode_with_source("devices response", e))
    }

    /// List the notifications defined in the Pushcut app
    pub fn notifications(&self) -> PushcutResult<Vec<NotificationTemplate>> {
        let body = self.perform_request(Method::GET, &["notifications"], None)?;
        serde_json::from_str(&body)
            .map_err(|e| PushcutError::decode_with_source("notifications response", e))
    }

    /// Send a notification exactly as it is defined in the app
    pub fn trigger_notification(&self, name: &str) -> PushcutResult<String> {
        self.send_notification(&Notification::default(), Some(name))
    }

    /// Send `notification` through the named notification, or through the
    /// client's default when `notification_name` is `None` or empty.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// [`PushcutError::MissingNotificationName`] if no name is available; no
    /// request is made in that case.
    pub fn send_notification(
        &self,
        notification: &Notification,
        notification_name: Option<&str>,
    ) -> PushcutResult<String> {
        let name = notification_name
            .filter(|name| !name.is_empty())
            .or(self.default_notification_name.as_deref())
            .ok_or(PushcutError::MissingNotificationName)?;

        let body = notification.to_value();
        self.perform_request(Method::POST, &["notifications", name], Some(&body))
    }

    /// Run a shortcut or HomeKit scene on the automation server
    pub fn execute_action(&self, action: &ServerAction) -> PushcutResult<String> {
        let body = action.to_value();
        self.perform_request(Method::POST, &["execute"], Some(&body))
    }

    pub fn run_shortcut(
        &self,
        name: &str,
        input: Option<&str>,
        options: ExecutionOptions,
    ) -> PushcutResult<String> {
        let mut action = ServerAction::shortcut(name).options(options);
        action.input = input.map(str::to_string);
        self.execute_action(&action)
    }

    pub fn launch_homekit_scene(
        &self,
        name: &str,
        options: ExecutionOptions,
    ) -> PushcutResult<String> {
        self.execute_action(&ServerAction::homekit(name).options(options))
    }

    /// Cancel a delayed server action scheduled with the same identifier.
    ///
    /// This does not interrupt anything local; it only removes the pending
    /// action on the Pushcut side.
    pub fn cancel_server_action(&self, identifier: &str) -> PushcutResult<String> {
        let body = json!({ "identifier": identifier });
        self.perform_request(Method::POST, &["cancelExecution"], Some(&body))
    }

    /// Issue one request and return the body of a 2xx response
    fn perform_request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&Value>,
    ) -> PushcutResult<String> {
        let url = self.build_url(segments)?;
        debug!(method = %method, path = url.path(), "Sending Pushcut request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let http_error = |e: reqwest::Error| PushcutError::Http {
            method: method.to_string(),
            url: url.to_string(),
            source: Some(Box::new(e)),
        };

        let response = request.send().map_err(http_error)?;
        let status = response.status();
        let text = response.text().map_err(http_error)?;

        debug!(status = status.as_u16(), bytes = text.len(), "Received Pushcut response");

        if status.is_success() {
            return Ok(text);
        }

        let err = PushcutError::from_response(status.as_u16(), &text);
        warn!(
            method = %method,
            path = url.path(),
            status = status.as_u16(),
            category = err.category(),
            "Pushcut API request failed"
        );
        Err(err)
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn build_url(&self, segments: &[&str]) -> PushcutResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PushcutError::InvalidUrl {
                url: self.base_url.to_string(),
                source: None,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn build_headers(api_key: &str) -> PushcutResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| PushcutError::invalid_header("API-Key", e))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

impl fmt::Debug for PushcutClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushcutClient")
            .field("base_url", &self.base_url.as_str())
            .field("default_notification_name", &self.default_notification_name)
            .finish_non_exhaustive()
    }
}
