use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, SqlErr, TransactionTrait,
};
use tracing::{debug, info};

use models::{errors::ModelError, ordering, search_group, search_term, search_term::NewTerm};

use crate::errors::ServiceError;
use crate::retry::{retry_with_policy, RetryPolicy};
use crate::search::domain::{GroupSummary, TermRecord};
use crate::search::repository::{group_exists_message, missing_group_message, SearchRepository};

#[derive(Debug, FromQueryResult)]
struct GroupCountRow {
    id: i32,
    name: String,
    term_count: i64,
}

impl From<GroupCountRow> for GroupSummary {
    fn from(r: GroupCountRow) -> Self {
        Self { id: r.id, name: r.name, term_count: r.term_count }
    }
}

/// PostgreSQL-backed repository. Every call goes through the retry policy;
/// mutations run in a transaction that rolls back when dropped. A failed
/// commit is reported as-is and never retried.
pub struct SeaOrmSearchRepository {
    pub db: DatabaseConnection,
    retry: RetryPolicy,
}

impl SeaOrmSearchRepository {
    pub fn new(db: DatabaseConnection, retry: RetryPolicy) -> Self {
        Self { db, retry }
    }
}

/// The write may already be durable when `COMMIT` fails, so the error is
/// made non-transient and the retry loop stops there.
fn commit_outcome_unknown(err: DbErr) -> ServiceError {
    ServiceError::Db(format!("commit outcome unknown: {err}"))
}

#[async_trait]
impl SearchRepository for SeaOrmSearchRepository {
    async fn list_groups(&self) -> Result<Vec<GroupSummary>, ServiceError> {
        retry_with_policy(&self.retry, || async move {
            let query = search_group::Entity::find()
                .select_only()
                .column(search_group::Column::Id)
                .column(search_group::Column::Name)
                .column_as(search_term::Column::Id.count(), "term_count")
                .join(JoinType::LeftJoin, search_group::Relation::SearchTerm.def())
                .group_by(search_group::Column::Id)
                .group_by(search_group::Column::Name);
            let rows = ordering::order_case_folded(query, "search_group", "name")
                .order_by_asc(search_group::Column::Id)
                .into_model::<GroupCountRow>()
                .all(&self.db)
                .await?;
            Ok::<_, ServiceError>(rows.into_iter().map(GroupSummary::from).collect::<Vec<_>>())
        })
        .await
    }

    async fn create_group(&self, name: &str) -> Result<GroupSummary, ServiceError> {
        let created = retry_with_policy(&self.retry, || async move {
            let txn = self.db.begin().await?;
            if search_group::find_by_name(&txn, name).await?.is_some() {
                return Err(ServiceError::Conflict(group_exists_message(name)));
            }
            let group = match search_group::create(&txn, name).await {
                Ok(g) => g,
                // a concurrent insert won the race on the unique index
                Err(ModelError::Db(e)) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    return Err(ServiceError::Conflict(group_exists_message(name)));
                }
                Err(e) => return Err(e.into()),
            };
            txn.commit().await.map_err(commit_outcome_unknown)?;
            Ok::<_, ServiceError>(group)
        })
        .await?;
        info!(group_id = created.id, "search_group inserted");
        Ok(GroupSummary::new_empty(created))
    }

    async fn delete_group(&self, id: i32) -> Result<(), ServiceError> {
        retry_with_policy(&self.retry, || async move {
            let txn = self.db.begin().await?;
            let found = search_group::Entity::find_by_id(id)
                .lock_exclusive()
                .one(&txn)
                .await?;
            if found.is_none() {
                return Err(ServiceError::not_found("search_group"));
            }
            // FK cascade would cover this; deleting explicitly keeps the count visible
            let removed = search_term::Entity::delete_many()
                .filter(search_term::Column::SearchGroupId.eq(id))
                .exec(&txn)
                .await?
                .rows_affected;
            search_group::Entity::delete_by_id(id).exec(&txn).await?;
            txn.commit().await.map_err(commit_outcome_unknown)?;
            debug!(group_id = id, removed_terms = removed, "search_group cascade committed");
            Ok::<_, ServiceError>(())
        })
        .await
    }

    async fn list_terms(&self, group_id: i32) -> Result<Vec<TermRecord>, ServiceError> {
        retry_with_policy(&self.retry, || async move {
            let group = search_group::Entity::find_by_id(group_id).one(&self.db).await?;
            if group.is_none() {
                return Err(ServiceError::not_found("search_group"));
            }
            let rows = search_term::list_by_group(&self.db, group_id).await?;
            Ok::<_, ServiceError>(rows.into_iter().map(TermRecord::from).collect::<Vec<_>>())
        })
        .await
    }

    async fn create_term(&self, input: NewTerm) -> Result<TermRecord, ServiceError> {
        let group_id = input.search_group_id;
        let created = retry_with_policy(&self.retry, || {
            let input = input.clone();
            async move {
                let txn = self.db.begin().await?;
                // shared lock: a concurrent group delete waits for this insert
                let group = search_group::Entity::find_by_id(input.search_group_id)
                    .lock_shared()
                    .one(&txn)
                    .await?;
                if group.is_none() {
                    return Err(ServiceError::Validation(missing_group_message(input.search_group_id)));
                }
                let term = match search_term::create(&txn, input).await {
                    Ok(t) => t,
                    Err(ModelError::Db(e)) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                        return Err(ServiceError::Validation(missing_group_message(group_id)));
                    }
                    Err(e) => return Err(e.into()),
                };
                txn.commit().await.map_err(commit_outcome_unknown)?;
                Ok::<_, ServiceError>(term)
            }
        })
        .await?;
        info!(term_id = created.id, group_id, "search_term inserted");
        Ok(TermRecord::from(created))
    }

    async fn delete_term(&self, id: i32) -> Result<(), ServiceError> {
        retry_with_policy(&self.retry, || async move {
            let res = search_term::Entity::delete_by_id(id).exec(&self.db).await?;
            if res.rows_affected == 0 {
                return Err(ServiceError::not_found("search_term"));
            }
            Ok::<_, ServiceError>(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        models::db::test_connection(&self.db).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
