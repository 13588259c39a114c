//! The generic CRUD contract.
//!
//! Each entity declares its table, its non-id columns, how to read a row
//! and how to bind its values; the service layer in [`crate::service`]
//! provides one generic implementation of `find_by_id` / `find_all` /
//! `add` / `update` / `delete_many` over it, so no entity carries its own
//! hand-written data-access code.

use exam_core::errors::CoreError;

use crate::error::DatabaseError;

/// Pre-delete dependency check for one row.
///
/// `dependents_sql` must be a `SELECT COUNT(*)` statement with a single
/// `?1` placeholder bound to `param`. A non-zero count vetoes that row's
/// delete and reports `conflict_message`; the rest of the batch proceeds.
pub struct DeleteGuard {
    pub dependents_sql: &'static str,
    pub param: libsql::Value,
    pub conflict_message: String,
}

/// Column mapping for one persisted entity type.
pub trait Record: Sized + Send + Sync {
    /// Insert input: the entity minus the store-assigned id.
    type New: Send + Sync;

    /// Table name.
    const TABLE: &'static str;

    /// Non-id columns, in the order `insert_values` / `update_values`
    /// bind them and `from_row` reads them (after the leading id).
    const COLUMNS: &'static [&'static str];

    /// `ORDER BY` clause for `find_all`, if the entity specifies one;
    /// store-default order otherwise.
    const ORDER_BY: Option<&'static str> = None;

    /// Read one entity from a row selected as `id, <COLUMNS...>`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or malformed.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    fn id(&self) -> i64;

    /// Values for `COLUMNS`, in order, for an insert.
    fn insert_values(new: &Self::New) -> Vec<libsql::Value>;

    /// Values for `COLUMNS`, in order, for a full-row update.
    fn update_values(&self) -> Vec<libsql::Value>;

    /// Client-side validation applied before an insert.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for inputs the store should never see.
    fn validate_new(new: &Self::New) -> Result<(), CoreError> {
        let _ = new;
        Ok(())
    }

    /// Entity-specific pre-delete check, evaluated per row inside the
    /// delete loop. Default: no guard.
    fn delete_guard(&self) -> Option<DeleteGuard> {
        None
    }
}

/// `SELECT id, <columns> FROM <table>` — the base of every read.
pub(crate) fn select_sql<T: Record>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

/// `find_all` statement, with the entity's `ORDER BY` when specified.
pub(crate) fn select_all_sql<T: Record>() -> String {
    match T::ORDER_BY {
        Some(order) => format!("{} ORDER BY {order}", select_sql::<T>()),
        None => select_sql::<T>(),
    }
}

/// `INSERT INTO <table> (<columns>) VALUES (?1, ..)` — id omitted, the
/// store assigns it.
pub(crate) fn insert_sql<T: Record>() -> String {
    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE <table> SET c1 = ?1, .. WHERE id = ?n` — full-row replace.
pub(crate) fn update_sql<T: Record>() -> String {
    let sets: Vec<String> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ?{}", i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        T::TABLE,
        sets.join(", "),
        T::COLUMNS.len() + 1
    )
}

/// `DELETE FROM <table> WHERE id = ?1`.
pub(crate) fn delete_sql<T: Record>() -> String {
    format!("DELETE FROM {} WHERE id = ?1", T::TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::entities::Department;
    use pretty_assertions::assert_eq;

    #[test]
    fn statement_builders_cover_all_columns() {
        assert_eq!(
            select_all_sql::<Department>(),
            "SELECT id, name FROM department ORDER BY id"
        );
        assert_eq!(
            insert_sql::<Department>(),
            "INSERT INTO department (name) VALUES (?1)"
        );
        assert_eq!(
            update_sql::<Department>(),
            "UPDATE department SET name = ?1 WHERE id = ?2"
        );
        assert_eq!(
            delete_sql::<Department>(),
            "DELETE FROM department WHERE id = ?1"
        );
    }
}
