//! Repository layer for data access.

mod account_repository;
pub mod entities;
mod entry_repository;

pub use account_repository::{AccountRepository, AccountStore};
pub use entry_repository::{EntryRepository, EntryStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use entry_repository::MockEntryRepository;
