//! Migrator registering entity-specific migrations in dependency order.
//! Indexes follow the tables; later migrations only alter columns.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_search_group;
mod m20240601_000002_create_search_term;
mod m20240601_000003_add_indexes;
mod m20240601_000004_unbounded_text;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_search_group::Migration),
            Box::new(m20240601_000002_create_search_term::Migration),
            Box::new(m20240601_000003_add_indexes::Migration),
            Box::new(m20240601_000004_unbounded_text::Migration),
        ]
    }
}
