//! Datastore access contract.

use crate::error::DataResult;
use nimbus_types::{Condition, Fields, ResultFilter, UpdateAction, Value};
use std::collections::BTreeSet;

/// CRUD, relationship management, and queries over the application's named
/// schemas.
///
/// Records are [`Fields`] maps whose values must match the schema declared
/// for the collection. No retry, batching, or consistency policy is part of
/// this contract; those are properties of the platform's datastore.
pub trait DataService: Send + Sync {
    /// Creates a new record.
    ///
    /// Fails with `InvalidSchema` if `schema` does not exist or `fields`
    /// does not match its declared shape, and with `Datastore` on
    /// connectivity or backend faults.
    fn create(&self, schema: &str, fields: Fields) -> DataResult<Fields>;

    /// Reads every record matching the conditions. The conditions are
    /// joined with "and"; an empty slice matches everything.
    fn read(&self, schema: &str, conditions: &[Condition]) -> DataResult<Vec<Fields>>;

    /// Reads matching records through a [`ResultFilter`], which bounds,
    /// orders, and projects the result set. A filter with an empty `fields`
    /// list returns whole records.
    fn read_filtered(
        &self,
        schema: &str,
        conditions: &[Condition],
        filter: &ResultFilter,
    ) -> DataResult<Vec<Fields>>;

    /// Applies the update actions to the record with the given id and
    /// returns the updated record.
    fn update(&self, schema: &str, id: &str, actions: &[UpdateAction]) -> DataResult<Fields>;

    /// Deletes the record with the given id. Returns whether a record was
    /// deleted.
    fn delete(&self, schema: &str, id: &str) -> DataResult<bool>;

    /// Counts the records matching the conditions without fetching them.
    fn count(&self, schema: &str, conditions: &[Condition]) -> DataResult<u64>;

    /// Appends the given ids to a relationship field of the record with id
    /// `id` and returns the updated record. The related records must
    /// already exist.
    fn add_related(
        &self,
        schema: &str,
        id: &Value,
        relation: &str,
        related_ids: &[Value],
    ) -> DataResult<Fields>;

    /// Removes the given ids from a relationship field. When
    /// `cascade_delete` is true the referenced records themselves are also
    /// deleted; otherwise only the references are dropped.
    fn remove_related(
        &self,
        schema: &str,
        id: &Value,
        relation: &str,
        related_ids: &[Value],
        cascade_delete: bool,
    ) -> DataResult<()>;

    /// Lists the schema names declared for the current application.
    fn schema_names(&self) -> DataResult<BTreeSet<String>>;
}
