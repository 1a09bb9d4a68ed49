use serde::{Serialize, Serializer};
use serde_json::Value;

use super::action::NotificationAction;
use super::sparse::{put_object, put_str, put_strings, JsonMap};

/// A push message sent through a notification defined in the Pushcut app.
///
/// Every field is optional; set fields override the defaults stored with the
/// notification on the Pushcut side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub title: Option<String>,
    pub text: Option<String>,
    pub sound: Option<String>,
    pub image: Option<String>,
    pub input: Option<String>,
    pub default_action: Option<NotificationAction>,
    pub actions: Vec<NotificationAction>,
    pub devices: Vec<String>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn default_action(mut self, action: NotificationAction) -> Self {
        self.default_action = Some(action);
        self
    }

    pub fn action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.devices.push(device.into());
        self
    }

    /// Sparse representation with nested actions reduced the same way
    pub fn as_map(&self) -> JsonMap {
        let mut map = JsonMap::new();
        put_str(&mut map, "title", self.title.as_deref());
        put_str(&mut map, "text", self.text.as_deref());
        put_str(&mut map, "sound", self.sound.as_deref());
        put_str(&mut map, "image", self.image.as_deref());
        put_str(&mut map, "input", self.input.as_deref());

        if let Some(action) = &self.default_action {
            put_object(&mut map, "defaultAction", action.as_map());
        }

        if !self.actions.is_empty() {
            let actions = self.actions.iter().map(NotificationAction::to_value).collect();
            map.insert("actions".to_string(), Value::Array(actions));
        }

        put_strings(&mut map, "devices", &self.devices);
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.as_map())
    }
}

impl Serialize for Notification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_map().serialize(serializer)
    }
}
