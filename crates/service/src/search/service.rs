use std::sync::Arc;

use tracing::{info, instrument, warn};

use common::types::DbHealth;
use models::{search_group, search_term};

use super::domain::{CreateGroupInput, CreateTermInput, GroupSummary, TermRecord};
use super::repo::InMemorySearchRepository;
use super::repository::SearchRepository;
use crate::errors::ServiceError;

/// Group/term business service independent of web framework and backend.
#[derive(Clone)]
pub struct SearchService {
    repo: Arc<dyn SearchRepository>,
}

impl SearchService {
    pub fn new(repo: Arc<dyn SearchRepository>) -> Self { Self { repo } }

    /// Empty in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySearchRepository::new()))
    }

    pub fn backend(&self) -> &'static str { self.repo.backend() }

    #[instrument(skip(self))]
    pub async fn list_groups(&self) -> Result<Vec<GroupSummary>, ServiceError> {
        self.repo.list_groups().await
    }

    /// Create a group after trimming its name.
    ///
    /// # Examples
    /// ```
    /// use service::search::{SearchService, domain::CreateGroupInput};
    /// let svc = SearchService::in_memory();
    /// let g = tokio_test::block_on(svc.create_group(CreateGroupInput { name: "  Sports ".into() })).unwrap();
    /// assert_eq!(g.name, "Sports");
    /// assert_eq!(g.term_count, 0);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_group(&self, input: CreateGroupInput) -> Result<GroupSummary, ServiceError> {
        let name = search_group::validate_name(&input.name)?;
        let group = self.repo.create_group(&name).await?;
        info!(event = "group_created", group_id = group.id, name = %group.name);
        Ok(group)
    }

    #[instrument(skip(self))]
    pub async fn delete_group(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_group(id).await?;
        info!(event = "group_deleted", group_id = id);
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_terms(&self, group_id: i32) -> Result<Vec<TermRecord>, ServiceError> {
        self.repo.list_terms(group_id).await
    }

    /// Create a term under an existing group.
    ///
    /// # Examples
    /// ```
    /// use service::search::{SearchService, domain::{CreateGroupInput, CreateTermInput}};
    /// let svc = SearchService::in_memory();
    /// let g = tokio_test::block_on(svc.create_group(CreateGroupInput { name: "News".into() })).unwrap();
    /// let t = tokio_test::block_on(svc.create_term(CreateTermInput {
    ///     term: " election ".into(),
    ///     search_group_id: g.id,
    ///     ..Default::default()
    /// })).unwrap();
    /// assert_eq!(t.term, "election");
    /// ```
    #[instrument(skip(self, input), fields(group_id = input.search_group_id))]
    pub async fn create_term(&self, input: CreateTermInput) -> Result<TermRecord, ServiceError> {
        let term = search_term::validate_term(&input.term)?;
        let new_term = search_term::NewTerm {
            term,
            search_group_id: input.search_group_id,
            start_date: input.start_date,
            end_date: input.end_date,
            output_query: search_term::normalize_output_query(input.output_query),
        };
        let created = self.repo.create_term(new_term).await?;
        info!(event = "term_created", term_id = created.id, group_id = created.search_group_id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_term(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_term(id).await?;
        info!(event = "term_deleted", term_id = id);
        Ok(())
    }

    /// Never fails: an unreachable backend is reported as `down`.
    pub async fn db_health(&self) -> DbHealth {
        match self.repo.ping().await {
            Ok(()) => DbHealth::up(),
            Err(e) => {
                warn!(backend = self.backend(), error = %e, "database health check failed");
                DbHealth::down(e.to_string())
            }
        }
    }
}
