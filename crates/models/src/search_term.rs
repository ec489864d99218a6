use sea_orm::{entity::prelude::*, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, ordering, search_group};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "search_term")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub term: String,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub output_query: Option<String>,
    pub search_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { SearchGroup }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SearchGroup => Entity::belongs_to(search_group::Entity)
                .from(Column::SearchGroupId)
                .to(search_group::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<search_group::Entity> for Entity {
    fn to() -> RelationDef { Relation::SearchGroup.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a new term; `create` normalises them.
#[derive(Clone, Debug, Default)]
pub struct NewTerm {
    pub term: String,
    pub search_group_id: i32,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub output_query: Option<String>,
}

pub fn validate_term(term: &str) -> Result<String, errors::ModelError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation("term required".into()));
    }
    Ok(trimmed.to_string())
}

/// Blank output queries are stored as NULL.
pub fn normalize_output_query(q: Option<String>) -> Option<String> {
    q.filter(|s| !s.trim().is_empty())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewTerm) -> Result<Model, errors::ModelError> {
    let term = validate_term(&input.term)?;
    let am = ActiveModel {
        term: Set(term),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        output_query: Set(normalize_output_query(input.output_query)),
        search_group_id: Set(input.search_group_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_group<C: ConnectionTrait>(db: &C, group_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    let query = Entity::find().filter(Column::SearchGroupId.eq(group_id));
    let rows = ordering::order_case_folded(query, "search_term", "term")
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
