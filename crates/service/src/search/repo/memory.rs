use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use models::ordering;
use models::search_term::{self, NewTerm};

use crate::errors::ServiceError;
use crate::search::domain::{GroupSummary, TermRecord};
use crate::search::repository::{group_exists_message, missing_group_message, SearchRepository};

pub const DEMO_GROUP_NAME: &str = "Demo";
pub const DEMO_TERM: &str = "rust";

#[derive(Default)]
struct State {
    groups: BTreeMap<i32, String>,
    terms: BTreeMap<i32, TermRecord>,
    last_group_id: i32,
    last_term_id: i32,
}

impl State {
    fn insert_group(&mut self, name: String) -> GroupSummary {
        self.last_group_id += 1;
        let id = self.last_group_id;
        self.groups.insert(id, name.clone());
        GroupSummary { id, name, term_count: 0 }
    }

    fn insert_term(&mut self, input: NewTerm, term: String) -> TermRecord {
        self.last_term_id += 1;
        let record = TermRecord {
            id: self.last_term_id,
            term,
            search_group_id: input.search_group_id,
            start_date: input.start_date,
            end_date: input.end_date,
            output_query: search_term::normalize_output_query(input.output_query),
        };
        self.terms.insert(record.id, record.clone());
        record
    }
}

/// Process-local store for development and tests. Contents die with the
/// process; ids are never reused within one instance.
#[derive(Default)]
pub struct InMemorySearchRepository {
    state: RwLock<State>,
}

impl InMemorySearchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one demo group holding one demo term.
    pub fn with_demo_data() -> Self {
        let mut state = State::default();
        let group = state.insert_group(DEMO_GROUP_NAME.to_string());
        state.insert_term(
            NewTerm { search_group_id: group.id, ..Default::default() },
            DEMO_TERM.to_string(),
        );
        Self { state: RwLock::new(state) }
    }
}

#[async_trait]
impl SearchRepository for InMemorySearchRepository {
    async fn list_groups(&self) -> Result<Vec<GroupSummary>, ServiceError> {
        let state = self.state.read().await;
        let mut groups: Vec<GroupSummary> = state
            .groups
            .iter()
            .map(|(&id, name)| GroupSummary {
                id,
                name: name.clone(),
                term_count: state.terms.values().filter(|t| t.search_group_id == id).count() as i64,
            })
            .collect();
        groups.sort_by(|a, b| ordering::compare(&a.name, &b.name).then(a.id.cmp(&b.id)));
        Ok(groups)
    }

    async fn create_group(&self, name: &str) -> Result<GroupSummary, ServiceError> {
        let mut state = self.state.write().await;
        let wanted = name.to_lowercase();
        if state.groups.values().any(|n| n.to_lowercase() == wanted) {
            return Err(ServiceError::Conflict(group_exists_message(name)));
        }
        Ok(state.insert_group(name.to_string()))
    }

    async fn delete_group(&self, id: i32) -> Result<(), ServiceError> {
        // one write guard covers the group and its terms
        let mut state = self.state.write().await;
        if state.groups.remove(&id).is_none() {
            return Err(ServiceError::not_found("search_group"));
        }
        let before = state.terms.len();
        state.terms.retain(|_, t| t.search_group_id != id);
        debug!(group_id = id, removed_terms = before - state.terms.len(), "in-memory cascade");
        Ok(())
    }

    async fn list_terms(&self, group_id: i32) -> Result<Vec<TermRecord>, ServiceError> {
        let state = self.state.read().await;
        if !state.groups.contains_key(&group_id) {
            return Err(ServiceError::not_found("search_group"));
        }
        let mut terms: Vec<TermRecord> = state
            .terms
            .values()
            .filter(|t| t.search_group_id == group_id)
            .cloned()
            .collect();
        terms.sort_by(|a, b| ordering::compare(&a.term, &b.term).then(a.id.cmp(&b.id)));
        Ok(terms)
    }

    async fn create_term(&self, input: NewTerm) -> Result<TermRecord, ServiceError> {
        let term = search_term::validate_term(&input.term)?;
        let mut state = self.state.write().await;
        if !state.groups.contains_key(&input.search_group_id) {
            return Err(ServiceError::Validation(missing_group_message(input.search_group_id)));
        }
        Ok(state.insert_term(input, term))
    }

    async fn delete_term(&self, id: i32) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        match state.terms.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("search_term")),
        }
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "in-memory"
    }
}
