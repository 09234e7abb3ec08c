//! Entity trait defining the core abstraction for all stored resources

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

/// Base trait for every persisted resource in the system.
///
/// All entities share the same lifecycle: the store assigns `id` and
/// `created_at` at creation time, both immutable afterwards. The associated
/// `Draft` type carries the caller-owned fields for `create`; `Patch`
/// carries the partial update applied by `update`.
///
/// The query hooks (`matches_filter`, `compare_by`, `unique_key`) let one
/// generic store implementation serve every resource type.
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Caller-supplied fields consumed by `create`
    type Draft: Send + 'static;

    /// Partial update consumed by `update`; unset fields are retained
    type Patch: Send + 'static;

    /// The singular resource name (e.g., "employee"), used in error messages
    fn resource_name() -> &'static str;

    /// The plural resource name used in listings and logs (e.g., "employees")
    fn resource_name_plural() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Build a full entity from store-assigned identity plus a draft
    fn build(id: Uuid, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Merge a partial patch into this entity. Fields absent from the patch
    /// must be left untouched.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Key that must be unique across the whole collection (e.g. a user's
    /// email). `None` disables the uniqueness check for this resource.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Free-text filter predicate for list queries.
    ///
    /// Implementations match `filter` case-insensitively against the
    /// resource's indexed display fields.
    fn matches_filter(&self, filter: &str) -> bool;

    /// Compare two entities on a named sort field.
    ///
    /// Unknown field names fall back to natural order (`created_at`). Ties
    /// are broken by the store, not here.
    fn compare_by(&self, other: &Self, field: &str) -> Ordering;

    /// Natural collection order: ascending `created_at`.
    fn natural_order(&self, other: &Self) -> Ordering {
        self.created_at().cmp(&other.created_at())
    }
}

/// Case-insensitive containment check used by `matches_filter` implementations.
pub fn field_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Serde helpers for patch types.
pub mod patch {
    use serde::{Deserialize, Deserializer};

    /// Distinguishes a field that is absent (retain current value) from one
    /// set to explicit `null` (clear it). Use on nullable patch fields as
    /// `#[serde(default, deserialize_with = "patch::double_option")]`.
    pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(de).map(Some)
    }
}
