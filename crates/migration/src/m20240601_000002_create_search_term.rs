//! Create `search_term` table.
//! Each term belongs to exactly one group and goes away with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchTerm::Table)
                    .if_not_exists()
                    .col(pk_auto(SearchTerm::Id))
                    .col(string_len(SearchTerm::Term, 400).not_null())
                    .col(timestamp_with_time_zone_null(SearchTerm::StartDate))
                    .col(timestamp_with_time_zone_null(SearchTerm::EndDate))
                    .col(text_null(SearchTerm::OutputQuery))
                    .col(integer(SearchTerm::SearchGroupId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_search_term_group")
                            .from(SearchTerm::Table, SearchTerm::SearchGroupId)
                            .to(SearchGroup::Table, SearchGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SearchTerm::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SearchTerm {
    Table,
    Id,
    Term,
    StartDate,
    EndDate,
    OutputQuery,
    SearchGroupId,
}

#[derive(DeriveIden)]
enum SearchGroup { Table, Id }
