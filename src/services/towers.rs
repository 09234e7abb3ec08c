//! Tower service
//!
//! Tower reads embed the tower's foundations as full objects, in natural
//! order.

use futures::future;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse, PaginationMeta};
use crate::core::store::EntityStore;
use crate::entities::foundation::{FoundationOutput, FoundationStore};
use crate::entities::tower::{Tower, TowerDraft, TowerOutput, TowerPatch};
use crate::entities::work::Work;
use crate::relations;

pub struct TowerService {
    towers: Arc<dyn EntityStore<Tower>>,
    works: Arc<dyn EntityStore<Work>>,
    foundations: Arc<dyn FoundationStore>,
}

impl TowerService {
    pub fn new(
        towers: Arc<dyn EntityStore<Tower>>,
        works: Arc<dyn EntityStore<Work>>,
        foundations: Arc<dyn FoundationStore>,
    ) -> Self {
        Self {
            towers,
            works,
            foundations,
        }
    }

    pub async fn create(&self, draft: TowerDraft) -> DomainResult<TowerOutput> {
        relations::ensure_exists(self.works.as_ref(), &draft.work_id).await?;

        let tower = self.towers.create(draft).await?;
        self.compose(tower).await
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<TowerOutput> {
        let tower = self
            .towers
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Tower>(id))?;
        self.compose(tower).await
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<TowerOutput>> {
        let input = PageInput::normalize(params);
        let page = self.towers.list(&input).await?;

        let data = future::try_join_all(page.items.into_iter().map(|tower| self.compose(tower)))
            .await?;
        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta::new(input.page, input.per_page, page.total),
        })
    }

    pub async fn update(&self, id: Uuid, patch: TowerPatch) -> DomainResult<TowerOutput> {
        if let Some(work_id) = patch.work_id {
            relations::ensure_exists(self.works.as_ref(), &work_id).await?;
        }
        let tower = self.towers.update(&id, patch).await?;
        self.compose(tower).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.towers.delete(&id).await
    }

    async fn compose(&self, tower: Tower) -> DomainResult<TowerOutput> {
        let foundations = self
            .foundations
            .find_by_tower(&tower.id)
            .await?
            .into_iter()
            .map(FoundationOutput::from)
            .collect();
        Ok(TowerOutput::compose(tower, foundations))
    }
}
