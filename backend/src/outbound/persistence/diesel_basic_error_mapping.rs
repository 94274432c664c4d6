//! Mapping from pool and Diesel failures into event repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EventRepositoryError;

use super::pool::PoolError;

/// Pool failures mean the database could not be reached.
pub(crate) fn map_pool_error(error: PoolError) -> EventRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EventRepositoryError::connection(message)
}

/// Closed connections map to connection errors; everything else is a query
/// error. Database messages are logged but not propagated.
pub(crate) fn map_diesel_error(error: DieselError) -> EventRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => EventRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => EventRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EventRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            EventRepositoryError::query("event row violates a table constraint")
        }
        _ => EventRepositoryError::query("database error"),
    }
}
