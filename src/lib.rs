//! Pushcut Client Library
//!
//! A blocking client for the [Pushcut](https://www.pushcut.io) web API: send
//! notifications, run shortcuts and HomeKit scenes on an automation server, and
//! cancel delayed server actions.
//!
//! ```rust,no_run
//! use pushcut::{ExecutionOptions, Notification, NotificationAction, PushcutClient};
//! use std::time::Duration;
//!
//! fn main() -> pushcut::PushcutResult<()> {
//!     let client = PushcutClient::new("my-api-key", Some("Doorbell".to_string()))?;
//!
//!     let notification = Notification::new()
//!         .title("Someone is at the door")
//!         .action(NotificationAction::new("Open").homekit("Unlock Door"));
//!     client.send_notification(&notification, None)?;
//!
//!     client.run_shortcut(
//!         "Lights Off",
//!         None,
//!         ExecutionOptions::new().delay(Duration::from_secs(600)).identifier("lights"),
//!     )?;
//!     client.cancel_server_action("lights")?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

// Re-export commonly used types for convenience
pub use client::PushcutClient;
pub use config::PushcutConfig;
pub use errors::{PushcutError, PushcutResult};
pub use models::{
    Delay, Device, ExecutionOptions, Notification, NotificationAction, NotificationTemplate,
    ServerAction, Timeout, UrlBackgroundOptions,
};
