use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response with a `{error, message}` JSON body. 404s go out bodyless.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", None)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NOT_FOUND {
            return self.status.into_response();
        }
        let body = serde_json::json!({"error": self.title, "message": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)),
            // duplicates are reported as a validation-class failure
            ServiceError::Conflict(msg) => Self::new(StatusCode::BAD_REQUEST, "Conflict", Some(msg)),
            ServiceError::NotFound(_) => Self::not_found(),
            ServiceError::Unavailable(_) | ServiceError::Db(_) => {
                error!(error = %e, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid Request Body", Some(rejection.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage initialisation failed: {0}")]
    Storage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
