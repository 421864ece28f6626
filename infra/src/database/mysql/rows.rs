//! Row decoding and error mapping shared by the MySQL repositories

use sqlx::mysql::MySqlRow;
use sqlx::{Decode, MySql, Row, Type};
use uuid::Uuid;

use bnb_core::errors::DomainError;

/// SQLSTATE for integrity constraint violations (duplicate key, foreign key)
const INTEGRITY_CONSTRAINT_VIOLATION: &str = "23000";
/// SQLSTATE for deadlocks and serialization failures
const SERIALIZATION_FAILURE: &str = "40001";

/// Map a SQLx error to a domain error
///
/// Constraint violations and serialization failures become `Conflict`;
/// everything else is a `Persistence` error.
pub(crate) fn query_error(context: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        match db.code().as_deref() {
            Some(INTEGRITY_CONSTRAINT_VIOLATION) => {
                return DomainError::conflict(format!("{}: {}", context, db.message()));
            }
            Some(SERIALIZATION_FAILURE) => {
                tracing::warn!("{}: transaction aborted by the database: {}", context, db.message());
                return DomainError::conflict(format!("{}: concurrent update", context));
            }
            _ => {}
        }
    }
    tracing::error!("{}: {}", context, e);
    DomainError::persistence(format!("{}: {}", context, e))
}

/// Read one column, reporting the column name on failure
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::persistence(format!("Failed to get {}: {}", name, e)))
}

/// Read a CHAR(36) column as a UUID
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DomainError::persistence(format!("Invalid UUID in {}: {}", name, e)))
}

/// Read a text column holding an enum value
pub(crate) fn parsed_column<T>(row: &MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = column(row, name)?;
    raw.parse()
        .map_err(|e: String| DomainError::persistence(format!("Invalid {}: {}", name, e)))
}

/// `?, ?, ?` with `n` placeholders for an `IN (...)` clause
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
