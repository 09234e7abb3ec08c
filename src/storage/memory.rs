//! In-memory implementation of the entity store contract
//!
//! One generic store serves every resource type through the query hooks on
//! [`StoredEntity`]. Useful for testing and development; uses `RwLock` for
//! thread-safe access and an insertion-ordered map so iteration is
//! deterministic.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::core::entity::StoredEntity;
use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{Page, PageInput, SortDir};
use crate::core::store::EntityStore;
use crate::entities::foundation::{Foundation, FoundationStore};
use crate::entities::user::{User, UserStore};

/// In-memory entity store
#[derive(Clone)]
pub struct InMemoryStore<T: StoredEntity> {
    items: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: StoredEntity> InMemoryStore<T> {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, IndexMap<Uuid, T>>> {
        self.items
            .read()
            .map_err(|e| DomainError::Internal(format!("failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, IndexMap<Uuid, T>>> {
        self.items
            .write()
            .map_err(|e| DomainError::Internal(format!("failed to acquire write lock: {}", e)))
    }

    /// Reject a unique-key collision with any record other than `except`.
    fn check_unique(
        items: &IndexMap<Uuid, T>,
        candidate: &T,
        except: Option<&Uuid>,
    ) -> DomainResult<()> {
        let Some(key) = candidate.unique_key() else {
            return Ok(());
        };
        let collision = items
            .values()
            .filter(|existing| except != Some(&existing.id()))
            .any(|existing| existing.unique_key().as_deref() == Some(key.as_str()));
        if collision {
            return Err(DomainError::Conflict {
                resource: T::resource_name(),
                message: format!("'{}' already exists", key),
            });
        }
        Ok(())
    }
}

impl<T: StoredEntity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort a filtered snapshot.
///
/// The requested field (or natural order) decides the primary ordering;
/// ties are always broken by ascending id, regardless of direction, so a
/// listing is stable across calls.
fn sort_items<T: StoredEntity>(items: &mut [T], input: &PageInput) {
    items.sort_by(|a, b| {
        let ord = match input.sort.as_deref() {
            Some(field) => a.compare_by(b, field),
            None => a.natural_order(b),
        };
        let ord = match input.sort_dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        };
        ord.then_with(|| a.id().cmp(&b.id()))
    });
}

#[async_trait]
impl<T: StoredEntity> EntityStore<T> for InMemoryStore<T> {
    async fn create(&self, draft: T::Draft) -> DomainResult<T> {
        let entity = T::build(Uuid::new_v4(), Utc::now(), draft);

        let mut items = self.write()?;
        Self::check_unique(&items, &entity, None)?;
        items.insert(entity.id(), entity.clone());

        tracing::debug!(resource = T::resource_name(), id = %entity.id(), "created");
        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> DomainResult<Option<T>> {
        let items = self.read()?;
        Ok(items.get(id).cloned())
    }

    async fn list(&self, input: &PageInput) -> DomainResult<Page<T>> {
        let items = self.read()?;

        let mut matching: Vec<T> = match input.filter.as_deref() {
            Some(filter) => items
                .values()
                .filter(|item| item.matches_filter(filter))
                .cloned()
                .collect(),
            None => items.values().cloned().collect(),
        };
        drop(items);

        sort_items(&mut matching, input);

        let total = matching.len();
        let page_items: Vec<T> = matching
            .into_iter()
            .skip(input.offset())
            .take(input.per_page as usize)
            .collect();

        Ok(Page {
            total,
            items: page_items,
        })
    }

    async fn update(&self, id: &Uuid, patch: T::Patch) -> DomainResult<T> {
        let mut items = self.write()?;

        let mut updated = items
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found::<T>(*id))?;
        updated.apply_patch(patch);

        Self::check_unique(&items, &updated, Some(id))?;
        items.insert(*id, updated.clone());

        tracing::debug!(resource = T::resource_name(), id = %id, "updated");
        Ok(updated)
    }

    async fn delete(&self, id: &Uuid) -> DomainResult<()> {
        let mut items = self.write()?;

        items
            .shift_remove(id)
            .ok_or_else(|| DomainError::not_found::<T>(*id))?;

        tracing::debug!(resource = T::resource_name(), id = %id, "deleted");
        Ok(())
    }
}

#[async_trait]
impl FoundationStore for InMemoryStore<Foundation> {
    async fn find_by_tower(&self, tower_id: &Uuid) -> DomainResult<Vec<Foundation>> {
        let items = self.read()?;

        let mut foundations: Vec<Foundation> = items
            .values()
            .filter(|f| &f.tower_id == tower_id)
            .cloned()
            .collect();
        drop(items);

        foundations.sort_by(|a, b| a.natural_order(b).then_with(|| a.id().cmp(&b.id())));
        Ok(foundations)
    }
}

#[async_trait]
impl UserStore for InMemoryStore<User> {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let items = self.read()?;
        Ok(items.values().find(|u| u.email == email).cloned())
    }
}
