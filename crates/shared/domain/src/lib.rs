//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! accounts, financial entries and the field rules an entry must satisfy.

pub mod account;
pub mod constants;
pub mod entry;
pub mod error;

pub use account::{Account, AccountResponse};
pub use constants::*;
pub use entry::{Entry, EntryFilter, EntryKind, EntryStatus};
pub use error::{DomainError, DomainResult};
