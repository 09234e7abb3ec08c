//! Reference validation and summary expansion
//!
//! The write path validates that every supplied relation id resolves to an
//! existing entity of the expected type before any store call is issued.
//! The read path expands stored ids into summary projections; ids that no
//! longer resolve are dropped from the output and logged as a
//! data-integrity warning, so one dangling reference never aborts a page.

use futures::future;
use std::collections::HashSet;
use uuid::Uuid;

use crate::core::entity::StoredEntity;
use crate::core::error::{DomainError, DomainResult};
use crate::core::store::EntityStore;

/// Validate a single reference.
pub async fn ensure_exists<T: StoredEntity>(
    store: &dyn EntityStore<T>,
    id: &Uuid,
) -> DomainResult<()> {
    match store.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(DomainError::invalid_reference::<T>(*id)),
    }
}

/// Validate a reference array: ids must be unique within the array and
/// each must resolve. Duplicates fail, they are never silently deduplicated.
pub async fn ensure_all_exist<T: StoredEntity>(
    store: &dyn EntityStore<T>,
    ids: &[Uuid],
) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(DomainError::Conflict {
                resource: T::resource_name(),
                message: format!("duplicate reference '{}'", id),
            });
        }
    }

    let found = future::try_join_all(ids.iter().map(|id| store.find_by_id(id))).await?;
    for (id, entity) in ids.iter().zip(found) {
        if entity.is_none() {
            return Err(DomainError::invalid_reference::<T>(*id));
        }
    }
    Ok(())
}

/// Expand stored ids into read-only summary projections.
///
/// Dangling ids are dropped from the result; each drop emits a warning so
/// the integrity problem is visible without failing the read.
pub async fn expand_summaries<T, S>(
    store: &dyn EntityStore<T>,
    ids: &[Uuid],
) -> DomainResult<Vec<S>>
where
    T: StoredEntity,
    S: for<'a> From<&'a T>,
{
    let found = future::try_join_all(ids.iter().map(|id| store.find_by_id(id))).await?;

    let mut summaries = Vec::with_capacity(ids.len());
    for (id, entity) in ids.iter().zip(found) {
        match entity {
            Some(entity) => summaries.push(S::from(&entity)),
            None => tracing::warn!(
                resource = T::resource_name(),
                id = %id,
                "dropping dangling reference from output"
            ),
        }
    }
    Ok(summaries)
}
