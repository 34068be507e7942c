//! Entry service - Validation and lifecycle of financial entries.
//!
//! SOLID (SRP): Handles entry use cases only. Status changes go through
//! the same validated update path as any other edit.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Entry, EntryFilter, EntryStatus};

use crate::repository::EntryRepository;

/// Entry service trait for dependency injection.
#[async_trait]
pub trait EntryService: Send + Sync {
    /// Check field rules, reporting the first violation
    fn validate(&self, entry: &Entry) -> AppResult<()>;

    /// Validate and persist a new entry
    async fn save(&self, entry: Entry) -> AppResult<Entry>;

    /// Validate and overwrite a persisted entry
    async fn update(&self, entry: Entry) -> AppResult<Entry>;

    /// Remove a persisted entry
    async fn delete(&self, entry: &Entry) -> AppResult<()>;

    /// Set the status and run a full update
    async fn update_status(&self, entry: Entry, status: EntryStatus) -> AppResult<Entry>;

    /// Entries matching every set field of the template
    async fn find_by_example(&self, template: &Entry) -> AppResult<Vec<Entry>>;

    /// Get entry by ID; absence is not an error
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Entry>>;
}

/// Concrete implementation of EntryService using repository.
pub struct EntryManager {
    repo: Arc<dyn EntryRepository>,
}

impl EntryManager {
    /// Create new entry service instance with repository
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self { repo }
    }
}

/// Id of an entry that must already be persisted
fn persisted_id(entry: &Entry, operation: &'static str) -> AppResult<Uuid> {
    entry.id.ok_or(AppError::Precondition(operation))
}

#[async_trait]
impl EntryService for EntryManager {
    fn validate(&self, entry: &Entry) -> AppResult<()> {
        entry.validate().map_err(AppError::from)
    }

    async fn save(&self, mut entry: Entry) -> AppResult<Entry> {
        self.validate(&entry)?;

        if entry.status.is_none() {
            entry.status = Some(EntryStatus::default());
        }

        let saved = self.repo.create(entry).await?;
        tracing::info!(entry_id = ?saved.id, "Entry saved");
        Ok(saved)
    }

    async fn update(&self, entry: Entry) -> AppResult<Entry> {
        let id = persisted_id(&entry, "an entry must be saved before it can be updated")?;
        self.validate(&entry)?;

        let updated = self.repo.update(entry).await?;
        tracing::info!(entry_id = %id, status = ?updated.status, "Entry updated");
        Ok(updated)
    }

    async fn delete(&self, entry: &Entry) -> AppResult<()> {
        let id = persisted_id(entry, "an entry must be saved before it can be deleted")?;

        self.repo.delete(id).await?;
        tracing::info!(entry_id = %id, "Entry deleted");
        Ok(())
    }

    async fn update_status(&self, mut entry: Entry, status: EntryStatus) -> AppResult<Entry> {
        entry.status = Some(status);
        self.update(entry).await
    }

    async fn find_by_example(&self, template: &Entry) -> AppResult<Vec<Entry>> {
        let filter = EntryFilter::from(template);
        tracing::debug!(?filter, "Searching entries");
        self.repo.find_all(filter).await
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Entry>> {
        self.repo.find_by_id(id).await
    }
}
