//! Store contract consumed by every service

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::entity::StoredEntity;
use crate::core::error::DomainResult;
use crate::core::page::{Page, PageInput};

/// Uniform persistence contract, one instance per resource type.
///
/// Implementations own all shared state; services treat them as black
/// boxes with atomic create/update and snapshot-consistent list.
#[async_trait]
pub trait EntityStore<T: StoredEntity>: Send + Sync {
    /// Persist a new entity. The store assigns `id` and `created_at`.
    ///
    /// Fails with `Conflict` when the entity's unique key collides with an
    /// existing record.
    async fn create(&self, draft: T::Draft) -> DomainResult<T>;

    /// Fetch a single entity. Absence is `Ok(None)`, never an error;
    /// callers decide how to react.
    async fn find_by_id(&self, id: &Uuid) -> DomainResult<Option<T>>;

    /// Filtered, sorted, page-bounded listing.
    ///
    /// `total` reflects the filter but not the page window, and is computed
    /// from the same snapshot as `items`.
    async fn list(&self, input: &PageInput) -> DomainResult<Page<T>>;

    /// Merge a partial patch into an existing record; fields omitted from
    /// the patch are untouched. Fails with `NotFound` when `id` is absent.
    async fn update(&self, id: &Uuid, patch: T::Patch) -> DomainResult<T>;

    /// Permanently remove a record.
    ///
    /// Deleting an id that does not exist fails with `NotFound`, symmetric
    /// with `update`.
    async fn delete(&self, id: &Uuid) -> DomainResult<()>;
}
