//! Error types produced while discovering defaults and parsing flags.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{CrossFlagsError, DefaultsError, ListFlagError, RegistryError};
