//! Migration: Create entries table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_accounts_table::Accounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Entries::Description).string().not_null())
                    .col(ColumnDef::new(Entries::Month).integer().not_null())
                    .col(ColumnDef::new(Entries::Year).integer().not_null())
                    .col(ColumnDef::new(Entries::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Entries::Value).decimal_len(16, 2).not_null())
                    .col(ColumnDef::new(Entries::Kind).string_len(20).not_null())
                    .col(ColumnDef::new(Entries::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Entries::RegisteredOn).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_owner_id")
                            .from(Entries::Table, Entries::OwnerId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Entries are always listed per owner
        manager
            .create_index(
                Index::create()
                    .name("idx_entries_owner_id")
                    .table(Entries::Table)
                    .col(Entries::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_entries_owner_id")
                    .table(Entries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Entries {
    Table,
    Id,
    Description,
    Month,
    Year,
    OwnerId,
    Value,
    Kind,
    Status,
    RegisteredOn,
}
