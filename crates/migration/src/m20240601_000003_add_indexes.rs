use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Group names compare case-insensitively, so the unique index is on LOWER(name).
const CREATE_GROUP_NAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_search_group_name_ci ON search_group (LOWER(name))";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_GROUP_NAME_INDEX)
            .await?;

        // SearchTerm: index on search_group_id for per-group listing and cascade
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_search_term_group")
                    .table(SearchTerm::Table)
                    .col(SearchTerm::SearchGroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_search_term_group").table(SearchTerm::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_search_group_name_ci").table(SearchGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SearchGroup { Table }

#[derive(DeriveIden)]
enum SearchTerm { Table, SearchGroupId }
