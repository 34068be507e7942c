//! Application state - services shared by all handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{AccountStore, EntryStore};
use crate::service::{AccountManager, AccountService, EntryManager, EntryService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Account registration and authentication
    pub account_service: Arc<dyn AccountService>,
    /// Entry lifecycle and search
    pub entry_service: Arc<dyn EntryService>,
    /// Database handle (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire SeaORM-backed stores and services on top of a database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let connection = database.get_connection();

        let account_repo = Arc::new(AccountStore::new(connection.clone()));
        let entry_repo = Arc::new(EntryStore::new(connection));

        Self {
            account_service: Arc::new(AccountManager::new(account_repo)),
            entry_service: Arc::new(EntryManager::new(entry_repo)),
            database,
        }
    }

    /// Create state with manually injected services.
    pub fn new(
        account_service: Arc<dyn AccountService>,
        entry_service: Arc<dyn EntryService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            account_service,
            entry_service,
            database,
        }
    }
}
