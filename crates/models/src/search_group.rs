use sea_orm::{entity::prelude::*, sea_query::{Expr, Func}, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, search_term};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "search_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { SearchTerm }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SearchTerm => Entity::has_many(search_term::Entity).into(),
        }
    }
}

impl Related<search_term::Entity> for Entity {
    fn to() -> RelationDef { Relation::SearchTerm.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Trim and require a non-empty group name.
pub fn validate_name(name: &str) -> Result<String, errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(trimmed.to_string())
}

/// Case-insensitive lookup by name, matching the `LOWER(name)` unique index.
pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    let name = validate_name(name)?;
    let am = ActiveModel {
        name: Set(name),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
