//! Foundation service

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::core::store::EntityStore;
use crate::entities::foundation::{
    Foundation, FoundationDraft, FoundationOutput, FoundationPatch, FoundationStore,
};
use crate::entities::tower::Tower;
use crate::relations;

pub struct FoundationService {
    foundations: Arc<dyn FoundationStore>,
    towers: Arc<dyn EntityStore<Tower>>,
}

impl FoundationService {
    pub fn new(foundations: Arc<dyn FoundationStore>, towers: Arc<dyn EntityStore<Tower>>) -> Self {
        Self {
            foundations,
            towers,
        }
    }

    pub async fn create(&self, draft: FoundationDraft) -> DomainResult<FoundationOutput> {
        relations::ensure_exists(self.towers.as_ref(), &draft.tower_id).await?;

        let foundation = self.foundations.create(draft).await?;
        Ok(FoundationOutput::from(foundation))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<FoundationOutput> {
        let foundation = self
            .foundations
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Foundation>(id))?;
        Ok(FoundationOutput::from(foundation))
    }

    pub async fn list(
        &self,
        params: ListParams,
    ) -> DomainResult<PaginatedResponse<FoundationOutput>> {
        let input = PageInput::normalize(params);
        let page = self.foundations.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, FoundationOutput::from))
    }

    pub async fn update(&self, id: Uuid, patch: FoundationPatch) -> DomainResult<FoundationOutput> {
        if let Some(tower_id) = patch.tower_id {
            relations::ensure_exists(self.towers.as_ref(), &tower_id).await?;
        }
        let foundation = self.foundations.update(&id, patch).await?;
        Ok(FoundationOutput::from(foundation))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.foundations.delete(&id).await
    }
}
