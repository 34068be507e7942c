//! Entry database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::{AppError, AppResult};
use domain::{Account, Entry, EntryKind, EntryStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub owner_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub value: Decimal,
    /// Stored as the `EntryKind` wire name
    pub kind: String,
    /// Stored as the `EntryStatus` wire name
    pub status: String,
    pub registered_on: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::OwnerId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to a domain entry, attaching the owning account when it was
    /// loaded alongside. A kind or status outside the known wire names is
    /// an internal error.
    pub fn into_entry(self, owner: Option<super::account::Model>) -> AppResult<Entry> {
        let kind = self.kind.parse::<EntryKind>().map_err(|e| {
            AppError::internal(format!(
                "entry {} has a stored kind of {:?}: {}",
                self.id, self.kind, e
            ))
        })?;
        let status = self.status.parse::<EntryStatus>().map_err(|e| {
            AppError::internal(format!(
                "entry {} has a stored status of {:?}: {}",
                self.id, self.status, e
            ))
        })?;

        let owner = match owner {
            Some(account) => Account::from(account),
            None => Account {
                id: Some(self.owner_id),
                ..Account::default()
            },
        };

        Ok(Entry {
            id: Some(self.id),
            description: Some(self.description),
            month: Some(self.month),
            year: Some(self.year),
            owner: Some(owner),
            value: Some(self.value),
            kind: Some(kind),
            status: Some(status),
            registered_on: self.registered_on,
        })
    }
}
