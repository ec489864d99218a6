use crate::{search_group, search_term};
use crate::errors::ModelError;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, ColumnTrait};
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

/// Test group CRUD operations
#[tokio::test]
async fn test_group_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("crud_group_{}", Uuid::new_v4());
    let created = search_group::create(&db, &format!("  {name}  ")).await?;
    assert_eq!(created.name, name);

    let found = search_group::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|g| g.name), Some(name.clone()));

    // lookup ignores case
    let by_name = search_group::find_by_name(&db, &name.to_uppercase()).await?;
    assert_eq!(by_name.map(|g| g.id), Some(created.id));

    search_group::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(search_group::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// The unique index rejects names differing only in case
#[tokio::test]
async fn test_group_name_unique_case_insensitive() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("unique_group_{}", Uuid::new_v4());
    let g = search_group::create(&db, &name).await?;

    let dup = search_group::create(&db, &name.to_uppercase()).await;
    match dup {
        Err(ModelError::Db(e)) => assert!(matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))),
        other => panic!("expected unique violation, got {:?}", other),
    }

    let count = search_group::Entity::find()
        .filter(search_group::Column::Id.eq(g.id))
        .count(&db)
        .await?;
    assert_eq!(count, 1);

    search_group::Entity::delete_by_id(g.id).exec(&db).await?;
    Ok(())
}

/// Test term CRUD operations and ordering
#[tokio::test]
async fn test_term_crud_and_order() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let g = search_group::create(&db, &format!("term_group_{}", Uuid::new_v4())).await?;
    for t in ["zebra", "  apple ", "mango"] {
        search_term::create(&db, search_term::NewTerm { term: t.into(), search_group_id: g.id, ..Default::default() }).await?;
    }

    let terms = search_term::list_by_group(&db, g.id).await?;
    let texts: Vec<_> = terms.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(texts, vec!["apple", "mango", "zebra"]);
    assert!(terms.iter().all(|t| t.output_query.is_none()));

    search_term::Entity::delete_by_id(terms[0].id).exec(&db).await?;
    assert_eq!(search_term::list_by_group(&db, g.id).await?.len(), 2);

    search_group::Entity::delete_by_id(g.id).exec(&db).await?;
    Ok(())
}

/// Inserting a term for a missing group violates the foreign key
#[tokio::test]
async fn test_term_requires_existing_group() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let res = search_term::create(&db, search_term::NewTerm { term: "orphan".into(), search_group_id: i32::MAX, ..Default::default() }).await;
    match res {
        Err(ModelError::Db(e)) => assert!(matches!(e.sql_err(), Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))),
        other => panic!("expected fk violation, got {:?}", other),
    }
    Ok(())
}
