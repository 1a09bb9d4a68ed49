//! Centralized error handling module
//!
//! All fallible operations in the crate return [`PushcutResult`].

pub mod types;

pub use types::{PushcutError, PushcutResult};
