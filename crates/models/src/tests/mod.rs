use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

use crate::db::{connect_with_config, DatabaseConfig, DATABASE_URL};


/// CRUD operations tests for both entities
pub mod crud_tests;

/// Transaction handling and cascade tests
pub mod transaction_tests;

/// Connect and migrate, or `None` when no database is configured for tests.
pub(crate) async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        println!("Skipping database tests (no DATABASE_URL or SKIP_DB_TESTS set)");
        return Ok(None);
    }
    let db = connect_with_config(&DatabaseConfig::from_url(DATABASE_URL.as_str())).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}
