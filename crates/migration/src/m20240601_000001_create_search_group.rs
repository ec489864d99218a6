//! Create `search_group` table.
//!
//! Parent entity; `search_term` rows reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(SearchGroup::Id))
                    .col(string_len(SearchGroup::Name, 200).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SearchGroup::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SearchGroup { Table, Id, Name }
