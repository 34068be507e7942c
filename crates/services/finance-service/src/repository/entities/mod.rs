//! SeaORM entities backing the repositories.

pub mod account;
pub mod entry;
