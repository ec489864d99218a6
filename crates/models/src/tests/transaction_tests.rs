use crate::{search_group, search_term};
use sea_orm::{TransactionTrait, EntityTrait, QueryFilter, ColumnTrait, PaginatorTrait};
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let txn = db.begin().await?;
    let created = search_group::create(&txn, &format!("tx_rollback_{}", Uuid::new_v4())).await?;
    txn.rollback().await?;

    assert!(search_group::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Test transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let txn = db.begin().await?;
    let created = search_group::create(&txn, &format!("tx_commit_{}", Uuid::new_v4())).await?;
    txn.commit().await?;

    assert!(search_group::Entity::find_by_id(created.id).one(&db).await?.is_some());
    search_group::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

/// Deleting a group through the FK cascade removes its terms
#[tokio::test]
async fn test_fk_cascade_removes_terms() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let g = search_group::create(&db, &format!("cascade_{}", Uuid::new_v4())).await?;
    for i in 0..3 {
        search_term::create(&db, search_term::NewTerm { term: format!("t{i}"), search_group_id: g.id, ..Default::default() }).await?;
    }

    search_group::Entity::delete_by_id(g.id).exec(&db).await?;

    let left = search_term::Entity::find()
        .filter(search_term::Column::SearchGroupId.eq(g.id))
        .count(&db)
        .await?;
    assert_eq!(left, 0);
    Ok(())
}
