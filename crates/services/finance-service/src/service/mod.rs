//! Application services layer - account and entry use cases.
//!
//! Services depend on repository traits, never on concrete stores.

mod account_service;
mod entry_service;

pub use account_service::{AccountManager, AccountService};
pub use entry_service::{EntryManager, EntryService};
