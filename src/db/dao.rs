//! Data access object contract shared by every entity type.

use crate::error::Result;

/// Persistence operations for one entity type.
///
/// Implementations translate each call into a single auto-committed SQL
/// statement. Driver failures surface as [`crate::AppError::Database`].
pub trait Dao<T>: Send + Sync {
    /// Insert a record that has no id yet and return it with the generated id.
    ///
    /// Fails with a precondition error when `entity` already carries an id.
    fn insert(&self, entity: &T) -> impl Future<Output = Result<T>> + Send;

    /// Overwrite the row keyed by the record's id.
    ///
    /// Succeeds even when no row matches. Fails with a precondition error
    /// when `entity` has no id.
    fn update(&self, entity: &T) -> impl Future<Output = Result<()>> + Send;

    /// Delete the row with `id`. Deleting a missing row is not an error.
    fn delete_by_id(&self, id: i32) -> impl Future<Output = Result<()>> + Send;

    /// Fetch one row, `None` when it does not exist.
    fn find_by_id(&self, id: i32) -> impl Future<Output = Result<Option<T>>> + Send;

    /// Fetch every row ordered by name.
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>>> + Send;
}
