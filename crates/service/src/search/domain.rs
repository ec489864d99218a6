use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use models::{search_group, search_term};

/// Group as listed by the API, with the number of terms it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: i32,
    pub name: String,
    pub term_count: i64,
}

impl GroupSummary {
    pub fn new_empty(group: search_group::Model) -> Self {
        Self { id: group.id, name: group.name, term_count: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    pub id: i32,
    pub term: String,
    pub search_group_id: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub output_query: Option<String>,
}

impl From<search_term::Model> for TermRecord {
    fn from(m: search_term::Model) -> Self {
        Self {
            id: m.id,
            term: m.term,
            search_group_id: m.search_group_id,
            start_date: m.start_date,
            end_date: m.end_date,
            output_query: m.output_query,
        }
    }
}

/// Body of `POST /api/groups`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGroupInput {
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /api/terms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTermInput {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub search_group_id: i32,
    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub output_query: Option<String>,
}

/// Accepts RFC 3339 timestamps, offset-less timestamps (taken as UTC) and
/// plain `YYYY-MM-DD` dates (midnight UTC). Empty strings and null are `None`.
pub mod flexible_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse(s).map(Some).map_err(serde::de::Error::custom),
        }
    }

    pub fn parse(s: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)));
        }
        Err(format!("invalid date '{s}', expected RFC 3339 or YYYY-MM-DD"))
    }
}
