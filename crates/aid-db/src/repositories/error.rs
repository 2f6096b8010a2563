//! Error handling utilities for repositories

use aid_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Map a unique violation by the name of the constraint that fired
///
/// `by_constraint` returns `None` for constraints it does not recognize,
/// which then surface as database errors.
pub fn map_constraint_violation<F>(e: SqlxError, by_constraint: F) -> DomainError
where
    F: FnOnce(&str) -> Option<DomainError>,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(mapped) = db_err.constraint().and_then(by_constraint) {
                return mapped;
            }
        }
    }
    map_db_error(e)
}

/// Map a foreign key violation to a not-found error for the referenced row
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    map_db_error(e)
}

/// A stored enum column held a value the domain does not know
pub fn corrupt_column(column: &str, err: &DomainError) -> DomainError {
    DomainError::DatabaseError(format!("unexpected value in {column}: {err}"))
}

/// `%term%` pattern for `ILIKE` filters, with wildcards in the term escaped
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
