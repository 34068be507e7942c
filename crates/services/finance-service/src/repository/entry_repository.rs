//! Entry repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, NotSet,
    QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::account::Entity as AccountEntity;
use super::entities::entry::{self, ActiveModel, Entity as EntryEntity};
use common::{AppError, AppResult};
use domain::{Entry, EntryFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entry repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert a new entry, assigning its id
    async fn create(&self, entry: Entry) -> AppResult<Entry>;

    /// Overwrite a persisted entry
    async fn update(&self, entry: Entry) -> AppResult<Entry>;

    /// Find entry by ID, with its owner loaded
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entry>>;

    /// Remove entry by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// All entries matching every set criterion of the filter
    async fn find_all(&self, filter: EntryFilter) -> AppResult<Vec<Entry>>;
}

/// Concrete implementation of EntryRepository
pub struct EntryStore {
    db: DatabaseConnection,
}

impl EntryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn required<T>(field: Option<T>, name: &str) -> AppResult<T> {
    field.ok_or_else(|| AppError::internal(format!("entry {} must be set before persisting", name)))
}

/// Build a fully populated active model. Callers validate first, so a
/// missing field here is an internal error.
fn to_active_model(id: Uuid, entry: &Entry) -> AppResult<ActiveModel> {
    Ok(ActiveModel {
        id: Set(id),
        description: Set(required(entry.description.clone(), "description")?),
        month: Set(required(entry.month, "month")?),
        year: Set(required(entry.year, "year")?),
        owner_id: Set(required(entry.owner_id(), "owner")?),
        value: Set(required(entry.value, "value")?),
        kind: Set(required(entry.kind, "kind")?.as_str().to_string()),
        status: Set(entry.status_or_default().as_str().to_string()),
        registered_on: Set(entry.registered_on),
    })
}

fn to_condition(filter: &EntryFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(id) = filter.id {
        condition = condition.add(entry::Column::Id.eq(id));
    }
    if let Some(description) = &filter.description {
        condition = condition.add(entry::Column::Description.eq(description.as_str()));
    }
    if let Some(month) = filter.month {
        condition = condition.add(entry::Column::Month.eq(month));
    }
    if let Some(year) = filter.year {
        condition = condition.add(entry::Column::Year.eq(year));
    }
    if let Some(owner_id) = filter.owner_id {
        condition = condition.add(entry::Column::OwnerId.eq(owner_id));
    }
    if let Some(value) = filter.value {
        condition = condition.add(entry::Column::Value.eq(value));
    }
    if let Some(kind) = filter.kind {
        condition = condition.add(entry::Column::Kind.eq(kind.as_str()));
    }
    if let Some(status) = filter.status {
        condition = condition.add(entry::Column::Status.eq(status.as_str()));
    }
    if let Some(registered_on) = filter.registered_on {
        condition = condition.add(entry::Column::RegisteredOn.eq(registered_on));
    }

    condition
}

#[async_trait]
impl EntryRepository for EntryStore {
    async fn create(&self, entry: Entry) -> AppResult<Entry> {
        let active_model = to_active_model(Uuid::new_v4(), &entry)?;
        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        let mut saved = model.into_entry(None)?;
        saved.owner = entry.owner;
        Ok(saved)
    }

    async fn update(&self, entry: Entry) -> AppResult<Entry> {
        let id = required(entry.id, "id")?;
        let mut active_model = to_active_model(id, &entry)?;
        // Ownership is fixed at creation
        active_model.owner_id = NotSet;

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::from(other),
        })?;

        let mut updated = model.into_entry(None)?;
        if updated.owner_id() == entry.owner_id() {
            updated.owner = entry.owner;
        }
        Ok(updated)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entry>> {
        let result = EntryEntity::find_by_id(id)
            .find_also_related(AccountEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result
            .map(|(model, owner)| model.into_entry(owner))
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EntryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn find_all(&self, filter: EntryFilter) -> AppResult<Vec<Entry>> {
        let rows = EntryEntity::find()
            .filter(to_condition(&filter))
            .find_also_related(AccountEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter()
            .map(|(model, owner)| model.into_entry(owner))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Account, EntryKind, EntryStatus};
    use rust_decimal::Decimal;

    fn valid_entry() -> Entry {
        Entry {
            description: Some("Aluguel".to_string()),
            month: Some(3),
            year: Some(2024),
            owner: Some(Account {
                id: Some(Uuid::new_v4()),
                ..Account::default()
            }),
            value: Some(Decimal::new(150000, 2)),
            kind: Some(EntryKind::Expense),
            ..Entry::default()
        }
    }

    #[test]
    fn active_model_defaults_status_to_pending() {
        let model = to_active_model(Uuid::new_v4(), &valid_entry()).unwrap();

        assert_eq!(model.status, Set("PENDING".to_string()));
        assert_eq!(model.kind, Set("EXPENSE".to_string()));
    }

    #[test]
    fn active_model_keeps_explicit_status() {
        let entry = Entry {
            status: Some(EntryStatus::Settled),
            ..valid_entry()
        };
        let model = to_active_model(Uuid::new_v4(), &entry).unwrap();

        assert_eq!(model.status, Set("SETTLED".to_string()));
    }

    #[test]
    fn active_model_rejects_unvalidated_entry() {
        let entry = Entry {
            owner: None,
            ..valid_entry()
        };

        let err = to_active_model(Uuid::new_v4(), &entry).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn empty_filter_has_no_conditions() {
        assert!(to_condition(&EntryFilter::default()).is_empty());

        let filter = EntryFilter {
            year: Some(2024),
            kind: Some(EntryKind::Income),
            ..EntryFilter::default()
        };
        assert_eq!(to_condition(&filter).len(), 2);
    }
}
