//! Classification of PostgreSQL constraint errors.
//!
//! Repositories return raw `sqlx::Error`; callers that need to branch on
//! the kind of violation use these helpers. Constraint names follow the
//! schema prefixes `uq_`, `fk_` and `ck_`.

use workbridge_core::error::CoreError;

/// SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE for `check_violation`.
pub const CHECK_VIOLATION: &str = "23514";

fn sqlstate(err: &sqlx::Error) -> Option<(String, Option<String>)> {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .map(|code| (code.into_owned(), db_err.constraint().map(str::to_string))),
        _ => None,
    }
}

/// A foreign-key violation raised by deleting (or re-keying) the parent
/// row, as opposed to inserting a child that points at nothing.
fn is_parent_side(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().starts_with("update or delete on table"),
        _ => false,
    }
}

/// Whether `err` is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(sqlstate(err), Some((code, _)) if code == UNIQUE_VIOLATION)
}

/// Whether `err` is a foreign-key violation.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(sqlstate(err), Some((code, _)) if code == FOREIGN_KEY_VIOLATION)
}

/// Map a constraint violation to a domain error.
///
/// Unique violations and deletes blocked by a `RESTRICT` key become
/// [`CoreError::Conflict`]; inserts pointing at a missing parent become
/// [`CoreError::NotFound`]; CHECK failures become [`CoreError::Validation`].
///
/// Returns `None` for errors that are not constraint violations (I/O,
/// decode errors, missing rows, ...), which callers should propagate as-is.
pub fn classify_db_error(err: &sqlx::Error) -> Option<CoreError> {
    let (code, constraint) = sqlstate(err)?;
    let constraint = constraint.unwrap_or_else(|| "unknown".to_string());
    match code.as_str() {
        UNIQUE_VIOLATION => Some(CoreError::Conflict(format!(
            "Duplicate value violates unique constraint: {constraint}"
        ))),
        FOREIGN_KEY_VIOLATION if is_parent_side(err) => Some(CoreError::Conflict(format!(
            "Row is still referenced: {constraint}"
        ))),
        FOREIGN_KEY_VIOLATION => Some(CoreError::not_found("referenced row", constraint)),
        CHECK_VIOLATION => Some(CoreError::Validation(format!(
            "Value violates check constraint: {constraint}"
        ))),
        _ => None,
    }
}
