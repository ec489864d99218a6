use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct DbHealthResponse {
    /// `up` or `down`
    pub db: String,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(Serialize, ToSchema)]
pub struct CreateGroupDoc { pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummaryDoc { pub id: i32, pub name: String, pub term_count: i64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTermDoc {
    pub term: String,
    pub search_group_id: i32,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[schema(example = "2024-01-01")]
    pub start_date: Option<String>,
    #[schema(example = "2024-12-31T23:59:59Z")]
    pub end_date: Option<String>,
    pub output_query: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TermDoc {
    pub id: i32,
    pub term: String,
    pub search_group_id: i32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub output_query: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::health::db_health,
        crate::routes::groups::list,
        crate::routes::groups::create,
        crate::routes::groups::delete,
        crate::routes::groups::list_terms,
        crate::routes::terms::create,
        crate::routes::terms::delete,
    ),
    components(
        schemas(
            HealthResponse,
            DbHealthResponse,
            ErrorDoc,
            CreateGroupDoc,
            GroupSummaryDoc,
            CreateTermDoc,
            TermDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "groups"),
        (name = "terms")
    )
)]
pub struct ApiDoc;
