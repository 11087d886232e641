//! Classification of SeaORM errors into repository errors.

use sea_orm::{DbErr, SqlErr};

use blogly_core::error::RepoError;

pub(crate) fn classify(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            RepoError::Constraint(format!("unique constraint violated: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            RepoError::Constraint(format!("foreign key constraint violated: {detail}"))
        }
        _ => match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
            DbErr::Conn(e) => RepoError::Connection(e.to_string()),
            DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
            other => RepoError::Query(other.to_string()),
        },
    }
}
