use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::sparse::{put_flag, put_object, put_str, put_string_map, JsonMap};

/// Request options for an action URL that is called in the background
/// instead of being opened on the device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBackgroundOptions {
    pub http_method: Option<String>,
    pub http_content_type: Option<String>,
    pub http_header: BTreeMap<String, String>,
    pub http_body: Option<String>,
}

impl UrlBackgroundOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.http_content_type = Some(content_type.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_header.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.http_body = Some(body.into());
        self
    }

    /// Sparse representation, keyed the way the API names these fields
    pub fn as_map(&self) -> JsonMap {
        let mut map = JsonMap::new();
        put_str(&mut map, "httpMethod", self.http_method.as_deref());
        put_str(&mut map, "httpContentType", self.http_content_type.as_deref());
        put_string_map(&mut map, "httpHeader", &self.http_header);
        put_str(&mut map, "httpBody", self.http_body.as_deref());
        map
    }
}

/// An interactive action attached to a notification.
///
/// Tapping the action can run a shortcut or HomeKit scene, either on the device
/// or on an automation server, or open/call a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationAction {
    pub name: Option<String>,
    pub input: Option<String>,
    pub keep_notification: Option<bool>,
    pub shortcut: Option<String>,
    pub homekit: Option<String>,
    pub run_on_server: Option<bool>,
    pub online: Option<String>,
    pub url: Option<String>,
    pub url_background_options: Option<UrlBackgroundOptions>,
}

impl NotificationAction {
    /// Create an action with the given button title
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn keep_notification(mut self, keep: bool) -> Self {
        self.keep_notification = Some(keep);
        self
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn homekit(mut self, scene: impl Into<String>) -> Self {
        self.homekit = Some(scene.into());
        self
    }

    pub fn run_on_server(mut self, run_on_server: bool) -> Self {
        self.run_on_server = Some(run_on_server);
        self
    }

    pub fn online(mut self, online: impl Into<String>) -> Self {
        self.online = Some(online.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn url_background_options(mut self, options: UrlBackgroundOptions) -> Self {
        self.url_background_options = Some(options);
        self
    }

    /// Sparse representation: only fields with a truthy value are present.
    ///
    /// `false` flags are dropped along with unset ones, since the API treats a
    /// missing flag as `false`.
    pub fn as_map(&self) -> JsonMap {
        let mut map = JsonMap::new();
        put_str(&mut map, "name", self.name.as_deref());
        put_str(&mut map, "input", self.input.as_deref());
        put_flag(&mut map, "keepNotification", self.keep_notification);
        put_str(&mut map, "shortcut", self.shortcut.as_deref());
        put_str(&mut map, "homekit", self.homekit.as_deref());
        put_flag(&mut map, "runOnServer", self.run_on_server);
        put_str(&mut map, "online", self.online.as_deref());
        put_str(&mut map, "url", self.url.as_deref());
        if let Some(options) = &self.url_background_options {
            put_object(&mut map, "urlBackgroundOptions", options.as_map());
        }
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.as_map())
    }
}

impl Serialize for NotificationAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_map().serialize(serializer)
    }
}
