//! Group names and term texts carry no length limit; only blank values are rejected.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SearchGroup::Table)
                    .modify_column(ColumnDef::new(SearchGroup::Name).text().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(SearchTerm::Table)
                    .modify_column(ColumnDef::new(SearchTerm::Term).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SearchTerm::Table)
                    .modify_column(ColumnDef::new(SearchTerm::Term).string_len(400).not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(SearchGroup::Table)
                    .modify_column(ColumnDef::new(SearchGroup::Name).string_len(200).not_null())
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum SearchGroup { Table, Name }

#[derive(DeriveIden)]
enum SearchTerm { Table, Term }
