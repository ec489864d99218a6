use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /health/db`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DbHealth {
    pub db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DbHealth {
    pub fn up() -> Self {
        Self { db: "up", error: None }
    }

    pub fn down(reason: impl Into<String>) -> Self {
        Self { db: "down", error: Some(reason.into()) }
    }

    pub fn is_up(&self) -> bool {
        self.db == "up"
    }
}
