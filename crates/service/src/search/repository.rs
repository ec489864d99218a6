use async_trait::async_trait;

use models::search_term::NewTerm;

use super::domain::{GroupSummary, TermRecord};
use crate::errors::ServiceError;

/// Data access for groups and terms, implemented once per storage backend.
///
/// Inputs arrive already normalised by `SearchService`; implementations own
/// existence checks, uniqueness, and the atomicity of the group cascade.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Groups ordered by name, each with its term count.
    async fn list_groups(&self) -> Result<Vec<GroupSummary>, ServiceError>;
    /// `Conflict` when a group with the same name (ignoring case) exists.
    async fn create_group(&self, name: &str) -> Result<GroupSummary, ServiceError>;
    /// Removes the group and every term it owns in one atomic step.
    async fn delete_group(&self, id: i32) -> Result<(), ServiceError>;
    /// Terms of one group ordered by text; `NotFound` for an unknown group.
    async fn list_terms(&self, group_id: i32) -> Result<Vec<TermRecord>, ServiceError>;
    /// `Validation` when the referenced group does not exist.
    async fn create_term(&self, input: NewTerm) -> Result<TermRecord, ServiceError>;
    async fn delete_term(&self, id: i32) -> Result<(), ServiceError>;
    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> Result<(), ServiceError>;
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

pub(crate) fn group_exists_message(name: &str) -> String {
    format!("a group named '{}' already exists", name)
}

pub(crate) fn missing_group_message(id: i32) -> String {
    format!("search group {} does not exist", id)
}
