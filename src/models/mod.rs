//! Request and response types for the Pushcut API
//!
//! Request types serialize to a sparse JSON object through `as_map()`: fields
//! that are unset, empty or `false` are left out of the payload entirely.

pub mod action;
pub mod execution;
pub mod notification;
pub mod records;
mod sparse;

pub use action::{NotificationAction, UrlBackgroundOptions};
pub use execution::{Delay, ExecutionOptions, ServerAction, Timeout};
pub use notification::Notification;
pub use records::{Device, NotificationTemplate};
pub use sparse::JsonMap;
