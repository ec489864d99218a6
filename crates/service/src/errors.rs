use models::errors::ModelError;
use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// Connection-level failure; worth retrying.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_transient(&self) -> bool { matches!(self, Self::Unavailable(_)) }
}

/// Whether a driver error is worth another attempt on a fresh connection.
pub fn is_transient_db_err(err: &DbErr) -> bool {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => matches!(
            e,
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed
        ),
        _ => false,
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Self::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return Self::Validation(msg),
            _ => {}
        }
        if is_transient_db_err(&err) {
            Self::Unavailable(err.to_string())
        } else {
            Self::Db(err.to_string())
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(e) => e.into(),
        }
    }
}
