//! HTTP request handlers.

mod account_handler;
mod entry_handler;

pub use account_handler::{account_routes, AuthenticateRequest, RegisterAccountRequest};
pub use entry_handler::{entry_routes, EntryQuery, EntryRequest, EntryResponse, StatusRequest};
